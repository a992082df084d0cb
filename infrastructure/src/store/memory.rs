//! In-memory inventory store.
//!
//! Implements the read-only [`InventoryRepository`] port over an
//! [`InventorySnapshot`] held behind a lock. The store can be seeded with the
//! bundled sample data or from a JSON file of the same shape.

use async_trait::async_trait;
use ims_application::ports::inventory_repository::{InventoryRepository, RepositoryError};
use ims_domain::{Borrower, InventorySnapshot, Item, Loan, RecordId, Vendor};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};
use thiserror::Error;
use tracing::info;

/// Sample data loaded when no seed file is configured
const SAMPLE_INVENTORY: &str = include_str!("sample_inventory.json");

/// Errors raised while building a store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Inconsistent seed data: {0}")]
    Integrity(String),
}

/// Inventory store held entirely in memory
#[derive(Debug)]
pub struct InMemoryInventoryStore {
    data: RwLock<InventorySnapshot>,
}

impl InMemoryInventoryStore {
    /// Create a store from a snapshot, checking referential integrity.
    pub fn new(snapshot: InventorySnapshot) -> Result<Self, StoreError> {
        validate(&snapshot)?;
        Ok(Self {
            data: RwLock::new(snapshot),
        })
    }

    /// Create a store seeded with the bundled sample inventory.
    pub fn with_sample_data() -> Result<Self, StoreError> {
        Self::from_json_str(SAMPLE_INVENTORY)
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let snapshot: InventorySnapshot = serde_json::from_str(json)?;
        Self::new(snapshot)
    }

    /// Create a store from a JSON seed file.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&contents)?;
        info!("Loaded inventory seed from {}", path.display());
        Ok(store)
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Result<InventorySnapshot, RepositoryError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InventorySnapshot>, RepositoryError> {
        self.data
            .read()
            .map_err(|_| RepositoryError::Unavailable("inventory lock poisoned".to_string()))
    }
}

fn validate(snapshot: &InventorySnapshot) -> Result<(), StoreError> {
    fn unique_ids<'a>(
        kind: &str,
        ids: impl Iterator<Item = RecordId> + 'a,
    ) -> Result<HashSet<RecordId>, StoreError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(StoreError::Integrity(format!("duplicate {} id {}", kind, id)));
            }
        }
        Ok(seen)
    }

    let vendors = unique_ids("vendor", snapshot.vendors.iter().map(|v| v.id))?;
    let items = unique_ids("item", snapshot.items.iter().map(|i| i.id))?;
    let borrowers = unique_ids("borrower", snapshot.borrowers.iter().map(|b| b.id))?;
    unique_ids("loan", snapshot.loans.iter().map(|l| l.id))?;

    if let Some(item) = snapshot.items.iter().find(|i| !vendors.contains(&i.vendor_id)) {
        return Err(StoreError::Integrity(format!(
            "item {} references unknown vendor {}",
            item.id, item.vendor_id
        )));
    }
    for loan in &snapshot.loans {
        if !items.contains(&loan.item_id) {
            return Err(StoreError::Integrity(format!(
                "loan {} references unknown item {}",
                loan.id, loan.item_id
            )));
        }
        if !borrowers.contains(&loan.borrower_id) {
            return Err(StoreError::Integrity(format!(
                "loan {} references unknown borrower {}",
                loan.id, loan.borrower_id
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryStore {
    async fn list_items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.read()?.items.clone())
    }

    async fn list_vendors(&self) -> Result<Vec<Vendor>, RepositoryError> {
        Ok(self.read()?.vendors.clone())
    }

    async fn list_borrowers(&self) -> Result<Vec<Borrower>, RepositoryError> {
        Ok(self.read()?.borrowers.clone())
    }

    async fn list_loans(&self) -> Result<Vec<Loan>, RepositoryError> {
        Ok(self.read()?.loans.clone())
    }

    async fn find_item(&self, id: RecordId) -> Result<Option<Item>, RepositoryError> {
        Ok(self.read()?.items.iter().find(|i| i.id == id).cloned())
    }

    async fn list_items_below(&self, threshold: i64) -> Result<Vec<Item>, RepositoryError> {
        Ok(self
            .read()?
            .items
            .iter()
            .filter(|i| i.is_below(threshold))
            .cloned()
            .collect())
    }
}
