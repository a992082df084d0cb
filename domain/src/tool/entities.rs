//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Risk level of a tool operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Read-only queries (every inventory lookup)
    Low,
    /// Operations that would modify state; never offered to the model
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, RiskLevel::Low)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool the model may call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "getItemById")
    pub name: String,
    /// Natural-language purpose shown to the model
    pub description: String,
    /// Risk level of this tool
    pub risk_level: RiskLevel,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_level,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.risk_level.is_read_only()
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// The tool catalog: a fixed, ordered set of uniquely named definitions.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool (builder pattern). A later definition with the same
    /// name replaces the earlier one in place.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.tools.iter_mut().find(|t| t.name == tool.name) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// All definitions in registration order
    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn read_only_tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().filter(|t| t.is_read_only())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments, as requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call (never empty)
    pub tool_name: String,
    /// Arguments passed to the tool; may be empty
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    /// Build a call from a model's function-call payload.
    ///
    /// `args` may be absent or `null` (no arguments) or an object; anything
    /// else, and an empty name, is rejected.
    pub fn from_function_call(
        name: &str,
        args: Option<&serde_json::Value>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyToolName);
        }

        let arguments = match args {
            None | Some(serde_json::Value::Null) => HashMap::new(),
            Some(serde_json::Value::Object(map)) => {
                map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
            }
            Some(other) => {
                return Err(DomainError::InvalidToolArguments(json_kind(other).to_string()));
            }
        };

        Ok(Self {
            tool_name: name.to_string(),
            arguments,
        })
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Arguments as a JSON object, for wire encoding and typed decoding.
    pub fn arguments_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.arguments
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_level() {
        assert!(RiskLevel::Low.is_read_only());
        assert!(!RiskLevel::High.is_read_only());
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("getItemById", "Retrieve one item", RiskLevel::Low)
            .with_parameter(
                ToolParameter::new("itemId", "The ID of the item", true).with_type("number"),
            );

        assert_eq!(tool.name, "getItemById");
        assert!(tool.is_read_only());
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameter("itemId").unwrap().param_type, "number");
        assert!(tool.parameter("missing").is_none());
    }

    #[test]
    fn test_tool_spec_preserves_registration_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("b", "B", RiskLevel::Low))
            .register(ToolDefinition::new("a", "A", RiskLevel::Low))
            .register(ToolDefinition::new("c", "C", RiskLevel::High));

        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(spec.read_only_tools().count(), 2);
        assert!(spec.get("unknown").is_none());
    }

    #[test]
    fn test_tool_spec_register_replaces_same_name() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("a", "first", RiskLevel::Low))
            .register(ToolDefinition::new("a", "second", RiskLevel::Low));

        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("a").unwrap().description, "second");
    }

    #[test]
    fn test_from_function_call_with_object_args() {
        let args = json!({"itemId": 3});
        let call = ToolCall::from_function_call("getItemById", Some(&args)).unwrap();

        assert_eq!(call.tool_name, "getItemById");
        assert_eq!(call.arguments.get("itemId"), Some(&json!(3)));
        assert_eq!(call.arguments_json(), args);
    }

    #[test]
    fn test_from_function_call_without_args() {
        let call = ToolCall::from_function_call("getAllVendors", None).unwrap();
        assert!(call.arguments.is_empty());

        let call = ToolCall::from_function_call("getAllVendors", Some(&json!(null))).unwrap();
        assert!(call.arguments.is_empty());
        assert_eq!(call.arguments_json(), json!({}));
    }

    #[test]
    fn test_from_function_call_rejects_bad_input() {
        assert_eq!(
            ToolCall::from_function_call("  ", None).unwrap_err(),
            DomainError::EmptyToolName
        );
        assert_eq!(
            ToolCall::from_function_call("getItemById", Some(&json!([1, 2]))).unwrap_err(),
            DomainError::InvalidToolArguments("array".to_string())
        );
    }
}
