//! Inventory domain module
//!
//! Read-only view of the application's stock data: items, the vendors that
//! supply them, the borrowers who take them out, and the loans linking the two.
//! The assistant reaches these records only through the application layer's
//! `InventoryRepository` port.

pub mod entities;

pub use entities::{Borrower, InventorySnapshot, Item, Loan, RecordId, Vendor};
