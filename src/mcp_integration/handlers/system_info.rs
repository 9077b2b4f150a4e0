//! System information handler: server metadata for agent discovery.

use super::success;
use crate::datastore::Datastore;
use crate::mcp_integration::core::{NsoMcpServer, NsoToolResult};
use serde_json::{Value, json};

/// Report server metadata and the fixed operating identity.
pub async fn handle_server_info<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    _arguments: Value,
) -> NsoToolResult {
    let info = server.server_info();
    let principal = server.operations.principal();
    success(
        "server_info",
        json!({
            "name": info.name,
            "version": info.version,
            "description": info.description,
            "operating_user": principal.user,
            "operating_context": principal.context,
        }),
        json!({}),
    )
}
