//! Tool execution handlers, grouped the way the tool schemas are.

pub mod inventory;
pub mod services;
pub mod sync;
pub mod system_info;

use crate::error::NsoError;
use crate::mcp_integration::core::NsoToolResult;
use serde_json::{Value, json};

/// Pull a required string argument, trimmed, or build the failure result.
pub(super) fn require_str_arg(arguments: &Value, name: &str) -> Result<String, NsoToolResult> {
    match arguments.get(name).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(NsoToolResult {
            success: false,
            content: json!({
                "error": format!("Missing {name} parameter"),
                "error_code": "MISSING_PARAMETER"
            }),
            metadata: None,
        }),
    }
}

/// Fold an operation error into the MCP-visible failure shape.
pub(super) fn failure(operation: &str, err: &NsoError) -> NsoToolResult {
    NsoToolResult {
        success: false,
        content: json!({
            "error": err.to_string(),
            "error_code": err.code(),
            "operation": operation
        }),
        metadata: None,
    }
}

/// Build a success result with an operation-tagged metadata block.
pub(super) fn success(operation: &str, content: Value, metadata: Value) -> NsoToolResult {
    let mut metadata = metadata;
    if let Some(object) = metadata.as_object_mut() {
        object.insert("operation".to_string(), json!(operation));
    }
    NsoToolResult {
        success: true,
        content,
        metadata: Some(metadata),
    }
}
