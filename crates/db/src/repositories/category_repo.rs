//! Repository for the `categories` table.

use tasklist_core::types::DbId;

use crate::models::category::Category;
use crate::DbPool;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, color";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by exact (case-sensitive) name.
    ///
    /// Legacy tables may repeat a name; the lowest id wins, as in the backfill.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE name = ?1 ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a category, returning the created row.
    ///
    /// A duplicate name surfaces as a unique-violation database error.
    pub async fn create(pool: &DbPool, name: &str, color: &str) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(color)
            .fetch_one(pool)
            .await
    }
}
