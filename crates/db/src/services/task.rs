use tasklist_core::error::CoreError;
use tasklist_core::task::{legacy_category_text, normalize_task_text};
use tasklist_core::types::DbId;

use crate::error::ServiceError;
use crate::models::category::Category;
use crate::models::task::{CreateTask, Task};
use crate::repositories::{CategoryRepo, TaskRepo};
use crate::DbPool;

/// Task operations over an injected pool.
///
/// Every task leaving this service has its effective category resolved.
#[derive(Debug, Clone)]
pub struct TaskService {
    pool: DbPool,
}

impl TaskService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All tasks, newest first.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        let rows = TaskRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Find one task by ID.
    pub async fn find_task(&self, id: DbId) -> Result<Option<Task>, ServiceError> {
        let row = TaskRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Task::from))
    }

    /// Validate and insert a task.
    ///
    /// With `category_id` the category must exist. Without it, a category
    /// whose name equals the supplied legacy name (or `General`) is linked if
    /// present. The legacy text column is always written.
    pub async fn create_task(&self, input: &CreateTask) -> Result<Task, ServiceError> {
        let text = normalize_task_text(&input.text)?;
        let referenced = self.resolve_reference(input).await?;

        let legacy = legacy_category_text(
            input.category.as_deref(),
            referenced.as_ref().map(|c| c.name.as_str()),
        );
        let category_id = referenced.as_ref().map(|c| c.id);

        let id = TaskRepo::create(&self.pool, &text, &legacy, category_id).await?;
        tracing::info!(task_id = id, ?category_id, category = %legacy, "Task created");

        self.find_task(id).await?.ok_or_else(|| {
            CoreError::Internal(format!("Task {id} missing immediately after insert")).into()
        })
    }

    /// Set the completion flag. Returns rows changed; 0 means no such task.
    pub async fn set_completed(&self, id: DbId, completed: bool) -> Result<u64, ServiceError> {
        let changes = TaskRepo::set_completed(&self.pool, id, completed).await?;
        tracing::info!(task_id = id, completed, changes, "Task completion updated");
        Ok(changes)
    }

    /// Delete a task. Returns rows deleted; 0 means no such task.
    pub async fn delete_task(&self, id: DbId) -> Result<u64, ServiceError> {
        let changes = TaskRepo::delete(&self.pool, id).await?;
        tracing::info!(task_id = id, changes, "Task deleted");
        Ok(changes)
    }

    async fn resolve_reference(&self, input: &CreateTask) -> Result<Option<Category>, ServiceError> {
        match input.category_id {
            Some(id) => CategoryRepo::find_by_id(&self.pool, id)
                .await?
                .map(Some)
                .ok_or_else(|| ServiceError::validation(format!("Category {id} does not exist"))),
            None => {
                let name = legacy_category_text(input.category.as_deref(), None);
                Ok(CategoryRepo::find_by_name(&self.pool, &name).await?)
            }
        }
    }
}
