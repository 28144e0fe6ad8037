//! Schema initialization, default seeding, and the legacy category migration.
//!
//! [`initialize`] is idempotent and runs on every process start:
//!
//! 1. create `categories` and `tasks` if absent
//! 2. add the legacy `tasks.category` text column to databases that predate it
//! 3. seed the default categories (insert-or-ignore)
//! 4. add `tasks.category_id` if absent and backfill it from `tasks.category`
//!
//! Steps 2 and 4 inspect `pragma_table_info` before altering anything, and
//! step 4 runs in a single transaction so a failed run leaves the schema
//! untouched and is retried on the next start.
//!
//! A legacy `categories` table may already hold duplicate names. The unique
//! index is then skipped with a warning rather than failing, and the later
//! steps do not depend on it: seeding checks for the name itself and the
//! backfill links to the lowest id carrying a name.

use sqlx::SqliteConnection;
use tasklist_core::category::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY, NEUTRAL_COLOR};

use crate::DbPool;

/// Outcome of a schema initialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// The legacy `tasks.category` column was added in this run.
    pub added_legacy_category: bool,
    /// The `tasks.category_id` column was added in this run.
    pub added_category_id: bool,
    /// Default categories inserted in this run.
    pub seeded: u64,
    /// Tasks whose `category_id` was filled in from their legacy name.
    pub backfilled: u64,
    /// Tasks still without a `category_id` after the backfill.
    pub unresolved: i64,
    /// Category names stored more than once, which blocks the unique index.
    pub duplicate_names: i64,
}

/// Create, seed and migrate the schema. Safe to call any number of times.
pub async fn initialize(pool: &DbPool) -> Result<MigrationReport, sqlx::Error> {
    let mut report = MigrationReport::default();

    report.duplicate_names = create_tables(pool).await?;
    report.added_legacy_category = ensure_legacy_category_column(pool).await?;
    report.seeded = seed_default_categories(pool).await?;

    let (added_category_id, backfilled) = migrate_category_reference(pool).await?;
    report.added_category_id = added_category_id;
    report.backfilled = backfilled;

    report.unresolved = count_unresolved(pool).await?;

    tracing::info!(
        added_legacy_category = report.added_legacy_category,
        added_category_id = report.added_category_id,
        seeded = report.seeded,
        backfilled = report.backfilled,
        unresolved = report.unresolved,
        duplicate_names = report.duplicate_names,
        "Schema initialized",
    );

    Ok(report)
}

/// Create both relations if they do not exist yet. Never destructive.
///
/// Returns the number of category names that are stored more than once.
async fn create_tables(pool: &DbPool) -> Result<i64, sqlx::Error> {
    let create_categories = format!(
        "CREATE TABLE IF NOT EXISTS categories (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL DEFAULT '{NEUTRAL_COLOR}'
        )"
    );
    sqlx::query(&create_categories).execute(pool).await?;

    // Tables created before the UNIQUE column constraint existed still get
    // storage-level uniqueness through this index, unless their data
    // already violates it.
    let duplicate_names = count_duplicate_names(pool).await?;
    if duplicate_names == 0 {
        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS uq_categories_name ON categories (name)")
            .execute(pool)
            .await?;
    } else {
        tracing::warn!(
            duplicate_names,
            "Duplicate category names present, skipping unique index on categories.name",
        );
    }

    let create_tasks = format!(
        "CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            text        TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 0 CHECK (completed IN (0, 1)),
            category    TEXT DEFAULT '{FALLBACK_CATEGORY}',
            category_id INTEGER REFERENCES categories (id) ON DELETE SET NULL
        )"
    );
    sqlx::query(&create_tasks).execute(pool).await?;

    Ok(duplicate_names)
}

async fn count_duplicate_names(pool: &DbPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM ( \
             SELECT name FROM categories GROUP BY name HAVING COUNT(*) > 1 \
         )",
    )
    .fetch_one(pool)
    .await
}

/// Add `tasks.category` to databases created before categories existed.
///
/// Returns `true` if the column was added.
async fn ensure_legacy_category_column(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if column_exists(&mut tx, "tasks", "category").await? {
        return Ok(false);
    }

    let alter = format!("ALTER TABLE tasks ADD COLUMN category TEXT DEFAULT '{FALLBACK_CATEGORY}'");
    sqlx::query(&alter).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("Added legacy tasks.category column");
    Ok(true)
}

/// Insert the default categories, skipping names that already exist.
///
/// Returns the number of rows actually inserted.
async fn seed_default_categories(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (name, color) in DEFAULT_CATEGORIES {
        let result = sqlx::query(
            "INSERT INTO categories (name, color) SELECT ?1, ?2 \
             WHERE NOT EXISTS (SELECT 1 FROM categories WHERE name = ?1)",
        )
        .bind(*name)
        .bind(*color)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

/// Add `tasks.category_id` if missing, then backfill unset references.
///
/// Both the structural change and the backfill commit together. The
/// backfill only touches rows whose reference is still NULL, so re-running
/// it is a no-op once every resolvable row is linked. Null `completed`
/// values left by the legacy schema are normalized to `0` in the same pass.
///
/// Returns `(column_added, rows_backfilled)`.
async fn migrate_category_reference(pool: &DbPool) -> Result<(bool, u64), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let added = if column_exists(&mut tx, "tasks", "category_id").await? {
        false
    } else {
        sqlx::query(
            "ALTER TABLE tasks ADD COLUMN category_id INTEGER \
             REFERENCES categories (id) ON DELETE SET NULL",
        )
        .execute(&mut *tx)
        .await?;
        tracing::info!("Added tasks.category_id column");
        true
    };

    let backfilled = sqlx::query(
        "UPDATE tasks SET category_id = ( \
             SELECT MIN(c.id) FROM categories c WHERE c.name = tasks.category \
         ) \
         WHERE category_id IS NULL \
           AND EXISTS (SELECT 1 FROM categories c WHERE c.name = tasks.category)",
    )
    .execute(&mut *tx)
    .await?
    .rows_affected();

    sqlx::query("UPDATE tasks SET completed = 0 WHERE completed IS NULL")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok((added, backfilled))
}

async fn count_unresolved(pool: &DbPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE category_id IS NULL")
        .fetch_one(pool)
        .await
}

/// Whether the task table carries the `category_id` reference, i.e. the last
/// initialization ran to completion at least once.
pub async fn is_migrated(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    column_exists(&mut conn, "tasks", "category_id").await
}

/// Check the schema metadata for a column on a table.
pub async fn column_exists(
    conn: &mut SqliteConnection,
    table: &str,
    column: &str,
) -> Result<bool, sqlx::Error> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2")
            .bind(table)
            .bind(column)
            .fetch_one(&mut *conn)
            .await?;
    Ok(count > 0)
}
