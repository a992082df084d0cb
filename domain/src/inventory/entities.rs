//! Inventory read-model entities
//!
//! These mirror the records the surrounding application persists. The
//! assistant only ever reads them; nothing in this crate mutates a store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier type shared by all inventory records.
pub type RecordId = i64;

/// A stocked inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    /// Fine charged per overdue day when the item is on loan
    pub fine_rate: f64,
    pub invoice_number: i64,
    pub vendor_id: RecordId,
    /// Free-form category label (e.g. "Stationary", "Electronics")
    pub item_type: String,
}

impl Item {
    /// One-line summary used by the item listing tools.
    pub fn summary_line(&self) -> String {
        format!(
            "• {} (ID: {}, Quantity: {}, Price: ${:.2})",
            self.name, self.id, self.quantity, self.price
        )
    }

    /// True if the on-hand quantity is strictly below `threshold`.
    pub fn is_below(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A loan of one item to one borrower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: RecordId,
    pub item_id: RecordId,
    pub borrower_id: RecordId,
    pub issue_date: NaiveDate,
    /// `None` while the item is still out
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub loan_duration_days: u32,
    pub total_fine: f64,
}

/// Complete contents of an inventory store at one instant.
///
/// Two snapshots compare equal when every record is identical, which is how
/// callers verify that a query left the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub borrowers: Vec<Borrower>,
    #[serde(default)]
    pub loans: Vec<Loan>,
}
