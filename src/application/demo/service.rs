//! DemoService - orchestrates demo operations over the repository port.

use std::sync::Arc;

use crate::domain::demo::{Demo, DemoFilter, DemoPatch, NewDemo};
use crate::domain::error::{AppError, ErrorCode};
use crate::ports::DemoRepository;

/// Service layer for the demo resource.
///
/// Owns the rules that sit between transport and persistence: existence
/// checks before deletes and patch validation before updates. Errors are
/// classified here or below and propagated without logging.
pub struct DemoService {
    repository: Arc<dyn DemoRepository>,
}

impl DemoService {
    pub fn new(repository: Arc<dyn DemoRepository>) -> Self {
        Self { repository }
    }

    /// List rows matching the filter.
    pub async fn list(&self, filter: DemoFilter) -> Result<Vec<Demo>, AppError> {
        self.repository.list(&filter).await
    }

    /// List one page of rows together with the total count.
    pub async fn list_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Demo>, i64), AppError> {
        self.repository.list_page(page, page_size).await
    }

    /// Fetch a row by id.
    pub async fn get(&self, id: i64) -> Result<Demo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("demo {id} not found")))
    }

    /// Create a row and return its id.
    pub async fn create(&self, demo: NewDemo) -> Result<i64, AppError> {
        self.repository.create(&demo).await
    }

    /// Create several rows in one statement.
    pub async fn create_batch(&self, demos: Vec<NewDemo>) -> Result<(), AppError> {
        self.repository.create_batch(&demos).await
    }

    /// Apply a partial update. An empty patch is a parameter error.
    pub async fn update(&self, id: i64, patch: DemoPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::business(
                ErrorCode::ParamInvalid,
                "no fields to update",
            ));
        }
        self.repository.update(id, &patch).await
    }

    /// Soft-delete a row after confirming it exists.
    pub async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        self.get(id).await?;
        self.repository.soft_delete(id).await
    }

    /// Hard-delete a row after confirming it exists.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.get(id).await?;
        self.repository.delete(id).await
    }
}
