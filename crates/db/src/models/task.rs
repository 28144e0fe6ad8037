//! Task models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklist_core::task::{resolve_effective_category, EffectiveCategory};
use tasklist_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A `tasks` row left-joined against `categories`.
///
/// `linked_name`/`linked_color` are NULL when `category_id` is unset or
/// points at a category that does not exist.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub text: String,
    pub completed: bool,
    pub category: Option<String>,
    pub category_id: Option<DbId>,
    pub linked_name: Option<String>,
    pub linked_color: Option<String>,
}

impl TaskRow {
    /// The category this task is displayed with.
    pub fn effective_category(&self) -> EffectiveCategory {
        let linked = self
            .linked_name
            .as_deref()
            .zip(self.linked_color.as_deref());
        resolve_effective_category(linked, self.category.as_deref())
    }
}

/// A task as returned to API consumers, with its effective category resolved.
///
/// `category` and `color` are always populated; `category_id` is only set
/// when the reference resolves to an existing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: DbId,
    pub text: String,
    #[serde(with = "tasklist_core::flag")]
    pub completed: bool,
    pub category: String,
    pub color: String,
    pub category_id: Option<DbId>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        let effective = row.effective_category();
        let category_id = row.linked_name.as_ref().and(row.category_id);
        Self {
            id: row.id,
            text: row.text,
            completed: row.completed,
            category: effective.name,
            color: effective.color,
            category_id,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a task.
///
/// `category_id` is the normalized reference; `category` is the legacy
/// free-text name, used to look up a reference when no id is given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    pub text: String,
    pub category_id: Option<DbId>,
    pub category: Option<String>,
}

/// DTO for toggling completion. Accepts `0`/`1` or a JSON boolean.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskCompletion {
    #[serde(with = "tasklist_core::flag")]
    pub completed: bool,
}
