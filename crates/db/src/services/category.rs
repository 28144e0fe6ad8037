use tasklist_core::category::{normalize_category_name, normalize_color};
use tasklist_core::error::CoreError;

use crate::error::{is_unique_violation, ServiceError};
use crate::models::category::{Category, CreateCategory};
use crate::repositories::CategoryRepo;
use crate::DbPool;

/// Category operations over an injected pool.
#[derive(Debug, Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All categories in insertion order.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    /// Validate and insert a category.
    ///
    /// Fails with [`CoreError::DuplicateName`] if the trimmed name is taken.
    /// The lookup covers legacy tables that lack the unique index; the
    /// unique-violation mapping covers concurrent inserts.
    pub async fn create_category(&self, input: &CreateCategory) -> Result<Category, ServiceError> {
        let name = normalize_category_name(&input.name)?;
        let color = normalize_color(input.color.as_deref())?;

        if CategoryRepo::find_by_name(&self.pool, &name).await?.is_some() {
            tracing::debug!(name = %name, "Duplicate category name rejected");
            return Err(CoreError::DuplicateName { name }.into());
        }

        match CategoryRepo::create(&self.pool, &name, &color).await {
            Ok(category) => {
                tracing::info!(category_id = category.id, name = %category.name, "Category created");
                Ok(category)
            }
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(name = %name, "Duplicate category name rejected");
                Err(CoreError::DuplicateName { name }.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
