//! Inventory query tools
//!
//! Six read-only lookups the model may request. Each tool has a name
//! constant, a `*_definition()` for the catalog and a handler that turns a
//! [`ToolCall`] into a [`ToolResult`] using the [`InventoryRepository`].
//!
//! Handlers decode arguments into typed structs first and report missing or
//! wrongly shaped parameters as tool errors, never as panics.

use ims_application::ports::inventory_repository::{InventoryRepository, RepositoryError};
use ims_domain::tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};
use ims_domain::{Item, RecordId};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Tool name constants
pub const GET_ALL_INVENTORY_ITEMS: &str = "getAllInventoryItems";
pub const GET_ALL_VENDORS: &str = "getAllVendors";
pub const GET_ALL_BORROWERS: &str = "getAllBorrowers";
pub const GET_ALL_LOANS: &str = "getAllLoans";
pub const GET_ITEM_BY_ID: &str = "getItemById";
pub const GET_LOW_STOCK_ITEMS: &str = "getLowStockItems";

/// Threshold used by `getLowStockItems` when the model omits one
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

// ==================== Definitions ====================

pub fn get_all_inventory_items_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ALL_INVENTORY_ITEMS,
        "Retrieves all inventory items in the system. Use when user asks about inventory, items, stock, or products.",
        RiskLevel::Low,
    )
}

pub fn get_all_vendors_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ALL_VENDORS,
        "Retrieves all vendors. Use when user asks about vendors or suppliers.",
        RiskLevel::Low,
    )
}

pub fn get_all_borrowers_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ALL_BORROWERS,
        "Retrieves all borrowers. Use when user asks about borrowers or users.",
        RiskLevel::Low,
    )
}

pub fn get_all_loans_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ALL_LOANS,
        "Retrieves all loans. Use when user asks about loans or borrowed items.",
        RiskLevel::Low,
    )
}

pub fn get_item_by_id_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ITEM_BY_ID,
        "Retrieves a specific item by its ID. Use when user asks about a specific item.",
        RiskLevel::Low,
    )
    .with_parameter(
        ToolParameter::new("itemId", "The ID of the item to retrieve", true).with_type("number"),
    )
}

pub fn get_low_stock_items_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_LOW_STOCK_ITEMS,
        "Retrieves items with low stock levels. Use when user asks about low stock, items running out, or inventory alerts.",
        RiskLevel::Low,
    )
    .with_parameter(
        ToolParameter::new(
            "threshold",
            "The quantity threshold below which items are considered low stock (default: 10)",
            false,
        )
        .with_type("number"),
    )
}

// ==================== Typed arguments ====================

/// Arguments for `getItemById`. Numbers arrive as JSON floats; the
/// fractional part is dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemByIdArgs {
    item_id: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LowStockArgs {
    threshold: Option<f64>,
}

fn decode_args<T: DeserializeOwned>(tool: &str, call: &ToolCall) -> Result<T, ToolError> {
    serde_json::from_value(call.arguments_json()).map_err(|e| {
        ToolError::invalid_argument(format!("Invalid arguments for {}: {}", tool, e))
    })
}

fn repository_failure(tool: &str, err: RepositoryError) -> ToolResult {
    debug!("{} failed in the data store: {}", tool, err);
    ToolResult::failure(tool, ToolError::execution_failed(err.to_string()))
}

fn serialize_failure(tool: &str, err: serde_json::Error) -> ToolResult {
    ToolResult::failure(tool, ToolError::execution_failed(err.to_string()))
}

fn item_lines(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| format!("{}\n", item.summary_line()))
        .collect()
}

/// `{"<key>": [...], "count": N}`
fn counted_listing<T: serde::Serialize>(tool: &str, key: &str, records: &[T]) -> ToolResult {
    let mut body = serde_json::Map::new();
    match serde_json::to_value(records) {
        Ok(value) => body.insert(key.to_string(), value),
        Err(e) => return serialize_failure(tool, e),
    };
    body.insert("count".to_string(), serde_json::json!(records.len()));
    ToolResult::success(tool, serde_json::Value::Object(body).to_string())
}

// ==================== Handlers ====================

pub async fn execute_get_all_inventory_items(
    repo: &dyn InventoryRepository,
    _call: &ToolCall,
) -> ToolResult {
    match repo.list_items().await {
        Ok(items) => ToolResult::success(
            GET_ALL_INVENTORY_ITEMS,
            format!(
                "Found {} inventory items:\n\n{}",
                items.len(),
                item_lines(&items)
            ),
        ),
        Err(e) => repository_failure(GET_ALL_INVENTORY_ITEMS, e),
    }
}

pub async fn execute_get_all_vendors(
    repo: &dyn InventoryRepository,
    _call: &ToolCall,
) -> ToolResult {
    match repo.list_vendors().await {
        Ok(vendors) => counted_listing(GET_ALL_VENDORS, "vendors", &vendors),
        Err(e) => repository_failure(GET_ALL_VENDORS, e),
    }
}

pub async fn execute_get_all_borrowers(
    repo: &dyn InventoryRepository,
    _call: &ToolCall,
) -> ToolResult {
    match repo.list_borrowers().await {
        Ok(borrowers) => counted_listing(GET_ALL_BORROWERS, "borrowers", &borrowers),
        Err(e) => repository_failure(GET_ALL_BORROWERS, e),
    }
}

pub async fn execute_get_all_loans(repo: &dyn InventoryRepository, _call: &ToolCall) -> ToolResult {
    match repo.list_loans().await {
        Ok(loans) => counted_listing(GET_ALL_LOANS, "loans", &loans),
        Err(e) => repository_failure(GET_ALL_LOANS, e),
    }
}

pub async fn execute_get_item_by_id(repo: &dyn InventoryRepository, call: &ToolCall) -> ToolResult {
    let args: ItemByIdArgs = match decode_args(GET_ITEM_BY_ID, call) {
        Ok(args) => args,
        Err(e) => return ToolResult::failure(GET_ITEM_BY_ID, e),
    };
    let Some(raw_id) = args.item_id else {
        return ToolResult::failure(GET_ITEM_BY_ID, ToolError::missing_parameter("itemId"));
    };
    let item_id = raw_id.trunc() as RecordId;

    match repo.find_item(item_id).await {
        Ok(Some(item)) => match serde_json::to_value(&item) {
            Ok(value) => ToolResult::success(
                GET_ITEM_BY_ID,
                serde_json::json!({ "item": value }).to_string(),
            ),
            Err(e) => serialize_failure(GET_ITEM_BY_ID, e),
        },
        Ok(None) => ToolResult::failure(
            GET_ITEM_BY_ID,
            ToolError::not_found(format!("Item not found with id: {}", item_id)),
        ),
        Err(e) => repository_failure(GET_ITEM_BY_ID, e),
    }
}

pub async fn execute_get_low_stock_items(
    repo: &dyn InventoryRepository,
    call: &ToolCall,
) -> ToolResult {
    let args: LowStockArgs = match decode_args(GET_LOW_STOCK_ITEMS, call) {
        Ok(args) => args,
        Err(e) => return ToolResult::failure(GET_LOW_STOCK_ITEMS, e),
    };
    let threshold = args
        .threshold
        .map(|t| t.trunc() as i64)
        .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);

    match repo.list_items_below(threshold).await {
        Ok(items) => {
            let mut output = format!(
                "Found {} items with stock below {}:\n\n",
                items.len(),
                threshold
            );
            if items.is_empty() {
                output.push_str("No items are currently low in stock.");
            } else {
                output.push_str(&item_lines(&items));
            }
            ToolResult::success(GET_LOW_STOCK_ITEMS, output)
        }
        Err(e) => repository_failure(GET_LOW_STOCK_ITEMS, e),
    }
}
