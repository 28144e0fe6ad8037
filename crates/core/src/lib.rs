//! Domain rules for the task list service.
//!
//! Everything in this crate is pure: validation, category defaults, the
//! effective-category resolver, and serde helpers shared by the store and the
//! HTTP layer. No I/O happens here.

pub mod category;
pub mod error;
pub mod flag;
pub mod task;
pub mod types;
