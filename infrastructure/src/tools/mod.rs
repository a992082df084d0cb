//! Inventory tool catalog and query gateway
//!
//! - `inventory`: tool definitions and their handlers
//! - `executor`: dispatch of model function calls to handlers
//! - `schema`: conversion of the catalog to Gemini function declarations

pub mod inventory;

mod executor;
mod schema;

pub use executor::{InventoryQuery, InventoryToolExecutor, ParityReport};
pub use schema::GeminiToolSchemaConverter;

use ims_domain::tool::entities::ToolSpec;

/// Create the tool catalog offered to the model, in declaration order
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(inventory::get_all_inventory_items_definition())
        .register(inventory::get_all_vendors_definition())
        .register(inventory::get_all_borrowers_definition())
        .register(inventory::get_all_loans_definition())
        .register(inventory::get_item_by_id_definition())
        .register(inventory::get_low_stock_items_definition())
}
