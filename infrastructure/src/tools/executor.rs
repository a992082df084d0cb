//! Inventory tool executor, the concrete implementation of [`ToolExecutorPort`].
//!
//! [`InventoryToolExecutor`] is the query gateway: it takes a function call
//! requested by the model, validates it against the catalog and dispatches it
//! to one of the read-only inventory handlers.
//!
//! # Dispatch
//!
//! ```text
//! ToolExecutorPort::execute()
//!   ├─ not in catalog or no handler → UNKNOWN_FUNCTION
//!   ├─ required parameter missing   → INVALID_ARGUMENT
//!   └─ otherwise                    → inventory::execute_*()
//! ```
//!
//! The catalog and the dispatch table are kept separately. At construction the
//! executor compares the two and logs a warning for every name that only one of
//! them knows about.

use async_trait::async_trait;
use ims_application::ports::inventory_repository::InventoryRepository;
use ims_application::ports::tool_executor::ToolExecutorPort;
use ims_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::inventory;

/// The dispatch table: every query the gateway has a handler for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryQuery {
    AllItems,
    AllVendors,
    AllBorrowers,
    AllLoans,
    ItemById,
    LowStockItems,
}

impl InventoryQuery {
    pub const ALL: [InventoryQuery; 6] = [
        InventoryQuery::AllItems,
        InventoryQuery::AllVendors,
        InventoryQuery::AllBorrowers,
        InventoryQuery::AllLoans,
        InventoryQuery::ItemById,
        InventoryQuery::LowStockItems,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InventoryQuery::AllItems => inventory::GET_ALL_INVENTORY_ITEMS,
            InventoryQuery::AllVendors => inventory::GET_ALL_VENDORS,
            InventoryQuery::AllBorrowers => inventory::GET_ALL_BORROWERS,
            InventoryQuery::AllLoans => inventory::GET_ALL_LOANS,
            InventoryQuery::ItemById => inventory::GET_ITEM_BY_ID,
            InventoryQuery::LowStockItems => inventory::GET_LOW_STOCK_ITEMS,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.name() == name)
    }
}

/// Names present in only one of catalog or dispatch table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParityReport {
    /// Declared to the model but not dispatchable
    pub missing_handlers: Vec<String>,
    /// Dispatchable but never offered to the model
    pub undeclared_handlers: Vec<String>,
}

impl ParityReport {
    pub fn check(spec: &ToolSpec) -> Self {
        Self {
            missing_handlers: spec
                .names()
                .filter(|name| InventoryQuery::from_name(name).is_none())
                .map(str::to_string)
                .collect(),
            undeclared_handlers: InventoryQuery::ALL
                .iter()
                .map(|q| q.name())
                .filter(|name| spec.get(name).is_none())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.missing_handlers.is_empty() && self.undeclared_handlers.is_empty()
    }
}

/// Executor that answers inventory queries from a repository.
#[derive(Clone)]
pub struct InventoryToolExecutor {
    repository: Arc<dyn InventoryRepository>,
    tool_spec: ToolSpec,
    parity: ParityReport,
}

impl InventoryToolExecutor {
    /// Create an executor over the full inventory catalog.
    pub fn new(repository: Arc<dyn InventoryRepository>) -> Self {
        Self::with_tools(repository, super::default_tool_spec())
    }

    /// Create an executor with a custom catalog
    pub fn with_tools(repository: Arc<dyn InventoryRepository>, tool_spec: ToolSpec) -> Self {
        let parity = ParityReport::check(&tool_spec);
        for name in &parity.missing_handlers {
            warn!("Tool '{}' is declared in the catalog but has no handler", name);
        }
        for name in &parity.undeclared_handlers {
            warn!("Handler '{}' has no catalog entry and will never be offered", name);
        }
        Self {
            repository,
            tool_spec,
            parity,
        }
    }

    pub fn parity(&self) -> &ParityReport {
        &self.parity
    }
}

impl std::fmt::Debug for InventoryToolExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryToolExecutor")
            .field("tools", &self.tool_spec.names().collect::<Vec<_>>())
            .field("parity", &self.parity)
            .finish()
    }
}

#[async_trait]
impl ToolExecutorPort for InventoryToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let (Some(definition), Some(query)) = (
            self.tool_spec.get(&call.tool_name),
            InventoryQuery::from_name(&call.tool_name),
        ) else {
            debug!("Rejecting unknown function '{}'", call.tool_name);
            return ToolResult::failure(&call.tool_name, ToolError::unknown_function(&call.tool_name));
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, e);
        }

        let repo = self.repository.as_ref();
        match query {
            InventoryQuery::AllItems => inventory::execute_get_all_inventory_items(repo, call).await,
            InventoryQuery::AllVendors => inventory::execute_get_all_vendors(repo, call).await,
            InventoryQuery::AllBorrowers => inventory::execute_get_all_borrowers(repo, call).await,
            InventoryQuery::AllLoans => inventory::execute_get_all_loans(repo, call).await,
            InventoryQuery::ItemById => inventory::execute_get_item_by_id(repo, call).await,
            InventoryQuery::LowStockItems => {
                inventory::execute_get_low_stock_items(repo, call).await
            }
        }
    }
}
