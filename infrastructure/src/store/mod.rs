//! Inventory data store adapters

mod memory;

pub use memory::{InMemoryInventoryStore, StoreError};
