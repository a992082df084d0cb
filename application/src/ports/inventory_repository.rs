//! Inventory repository port
//!
//! The narrow, read-only view of the application's data store used by the
//! query gateway. There are deliberately no write methods.

use async_trait::async_trait;
use ims_domain::{Borrower, Item, Loan, RecordId, Vendor};
use thiserror::Error;

/// Errors raised by the underlying data access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Data store unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Query(String),
}

/// Read-only access to inventory records
///
/// Implementations own their concurrency control; callers never lock.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, RepositoryError>;

    async fn list_vendors(&self) -> Result<Vec<Vendor>, RepositoryError>;

    async fn list_borrowers(&self) -> Result<Vec<Borrower>, RepositoryError>;

    async fn list_loans(&self) -> Result<Vec<Loan>, RepositoryError>;

    async fn find_item(&self, id: RecordId) -> Result<Option<Item>, RepositoryError>;

    /// Items whose quantity is strictly below `threshold`.
    ///
    /// Default implementation filters [`list_items`](Self::list_items).
    async fn list_items_below(&self, threshold: i64) -> Result<Vec<Item>, RepositoryError> {
        Ok(self
            .list_items()
            .await?
            .into_iter()
            .filter(|item| item.is_below(threshold))
            .collect())
    }
}
