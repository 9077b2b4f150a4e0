//! System tool schemas.

use serde_json::{Value, json};

/// Schema for the server-info tool.
pub fn server_info_tool() -> Value {
    json!({
        "name": "nso_server_info",
        "description": "Get metadata about this NSO MCP server: name, version, and the fixed operating identity",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}
