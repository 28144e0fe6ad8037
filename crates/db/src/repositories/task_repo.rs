//! Repository for the `tasks` table.
//!
//! Reads always left-join `categories` so callers get the raw material for
//! effective-category resolution in one query.

use tasklist_core::types::DbId;

use crate::models::task::TaskRow;
use crate::DbPool;

/// Select list for joined task reads. `completed` is coalesced so rows from
/// the legacy schema never decode as NULL.
const JOINED_SELECT: &str = "\
    SELECT t.id, t.text, COALESCE(t.completed, 0) AS completed, \
           t.category, t.category_id, \
           c.name AS linked_name, c.color AS linked_color \
    FROM tasks t \
    LEFT JOIN categories c ON c.id = t.category_id";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<TaskRow>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY t.id DESC");
        sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE t.id = ?1");
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a task (always not completed), returning its new ID.
    pub async fn create(
        pool: &DbPool,
        text: &str,
        category: &str,
        category_id: Option<DbId>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO tasks (text, completed, category, category_id) \
             VALUES (?1, 0, ?2, ?3) RETURNING id",
        )
        .bind(text)
        .bind(category)
        .bind(category_id)
        .fetch_one(pool)
        .await
    }

    /// Set the completion flag. Returns the number of rows changed.
    pub async fn set_completed(
        pool: &DbPool,
        id: DbId,
        completed: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE tasks SET completed = ?1 WHERE id = ?2")
            .bind(completed)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a task by ID. Returns the number of rows deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
