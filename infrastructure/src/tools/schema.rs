//! Gemini function declaration converter.
//!
//! Implementation of [`ToolSchemaPort`] that produces the entries of a
//! Gemini `functionDeclarations` array.

use ims_application::ports::tool_schema::ToolSchemaPort;
use ims_domain::tool::entities::ToolDefinition;

/// Converts catalog entries into Gemini function declarations.
///
/// Handles param_type → schema type mapping:
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
///
/// `required` is only emitted when at least one parameter is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiToolSchemaConverter;

impl ToolSchemaPort for GeminiToolSchemaConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": schema_type,
                    "description": param.description,
                }),
            );

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        let mut parameters = serde_json::Map::new();
        parameters.insert("type".to_string(), serde_json::json!("object"));
        parameters.insert(
            "properties".to_string(),
            serde_json::Value::Object(properties),
        );
        if !required.is_empty() {
            parameters.insert("required".to_string(), serde_json::Value::Array(required));
        }

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "parameters": parameters,
        })
    }
}
