//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolError;

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError>;
}

/// Default implementation of ToolValidator
///
/// Checks that every required parameter is present and not `null`.
/// Extra arguments are ignored; models occasionally volunteer them.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError> {
        for param in definition.parameters.iter().filter(|p| p.required) {
            match call.arguments.get(&param.name) {
                None | Some(serde_json::Value::Null) => {
                    return Err(ToolError::missing_parameter(&param.name));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{RiskLevel, ToolParameter};

    fn definition() -> ToolDefinition {
        ToolDefinition::new("getItemById", "Retrieve one item", RiskLevel::Low)
            .with_parameter(ToolParameter::new("itemId", "Item id", true).with_type("number"))
            .with_parameter(ToolParameter::new("verbose", "Extra detail", false))
    }

    #[test]
    fn test_validator_missing_required() {
        let err = DefaultToolValidator
            .validate(&ToolCall::new("getItemById"), &definition())
            .unwrap_err();
        assert_eq!(err.message, "itemId parameter is required");
    }

    #[test]
    fn test_validator_null_counts_as_missing() {
        let call = ToolCall::new("getItemById").with_arg("itemId", serde_json::Value::Null);
        assert!(DefaultToolValidator.validate(&call, &definition()).is_err());
    }

    #[test]
    fn test_validator_ignores_unknown_params() {
        let call = ToolCall::new("getItemById")
            .with_arg("itemId", 4)
            .with_arg("unexpected", "value");
        assert!(DefaultToolValidator.validate(&call, &definition()).is_ok());
    }
}
