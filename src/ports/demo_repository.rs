//! Demo repository port.
//!
//! Defines the persistence contract for the demo resource. Implementations
//! translate raw database failures into the [`AppError`] taxonomy; duplicate
//! unique-key violations become `DuplicateKey` business errors, everything
//! else unexpected becomes a system error. Repositories never log.

use async_trait::async_trait;

use crate::domain::demo::{Demo, DemoFilter, DemoPatch, NewDemo};
use crate::domain::error::AppError;

/// Repository port for demo persistence.
#[async_trait]
pub trait DemoRepository: Send + Sync {
    /// List rows matching the filter.
    async fn list(&self, filter: &DemoFilter) -> Result<Vec<Demo>, AppError>;

    /// List one page of rows together with the total row count.
    ///
    /// `page` is 1-based; callers normalize it before this point.
    async fn list_page(&self, page: u32, page_size: u32) -> Result<(Vec<Demo>, i64), AppError>;

    /// Find a row by id. Returns `None` when absent.
    async fn find_by_id(&self, id: i64) -> Result<Option<Demo>, AppError>;

    /// Insert a row and return its generated id.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` when a unique column collides
    async fn create(&self, demo: &NewDemo) -> Result<i64, AppError>;

    /// Insert several rows in one statement.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` when a unique column collides
    async fn create_batch(&self, demos: &[NewDemo]) -> Result<(), AppError>;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when no row was affected
    async fn update(&self, id: i64, patch: &DemoPatch) -> Result<(), AppError>;

    /// Mark a row deleted without removing it.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when no row was affected
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;

    /// Remove a row.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when no row was affected
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn demo_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DemoRepository) {}
    }
}
