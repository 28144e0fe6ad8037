//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklist_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a new category. `color` falls back to the neutral color.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color: Option<String>,
}
