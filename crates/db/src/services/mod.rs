//! Category and task services.
//!
//! Services own validation and shaping; repositories own SQL. Each service
//! holds a clone of the pool it was constructed with.

pub mod category;
pub mod task;

pub use category::CategoryService;
pub use task::TaskService;
