//! Core MCP integration infrastructure.
//!
//! Foundational types the rest of the MCP layer builds on: the server wrapper
//! around an operation handler, server metadata for agent discovery, and the
//! structured tool-execution result.

use crate::datastore::Datastore;
use crate::operations::NsoOperationHandler;
use serde_json::Value;

/// Metadata AI agents use to understand what this server fronts.
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Human-readable server name
    pub name: String,
    /// Version string of this implementation
    pub version: String,
    /// What the server does, for agent context
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        McpServerInfo {
            name: "NSO MCP Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description:
                "Network-configuration datastore operations: device inventory, groups, services, and sync"
                    .to_string(),
        }
    }
}

/// Outcome of one tool execution, as seen by the MCP client.
///
/// A failing operation yields `success: false` with an error object as the
/// content; the content of a successful call is always fully populated.
#[derive(Debug, Clone)]
pub struct NsoToolResult {
    /// Whether the tool execution succeeded
    pub success: bool,
    /// Result data on success, error information on failure
    pub content: Value,
    /// Optional context about the operation performed
    pub metadata: Option<Value>,
}

/// MCP server wrapper over the NSO operation handler.
///
/// The main entry point of the crate: wraps a [`NsoOperationHandler`] and
/// exposes its capabilities as discoverable MCP tools.
///
/// # Examples
///
/// ```rust
/// use nso_mcp_server::{
///     InMemoryDatastore, NsoMcpServer, NsoOperationHandler, Principal,
/// };
///
/// let store = InMemoryDatastore::new();
/// let principal = Principal {
///     user: "nsoadmin".to_string(),
///     context: "system".to_string(),
/// };
/// let server = NsoMcpServer::new(NsoOperationHandler::new(store, principal));
/// assert!(!server.get_tools().is_empty());
/// ```
pub struct NsoMcpServer<D: Datastore> {
    pub(crate) operations: NsoOperationHandler<D>,
    pub(crate) server_info: McpServerInfo,
}

impl<D: Datastore + 'static> NsoMcpServer<D> {
    /// Wrap an operation handler with default server metadata.
    pub fn new(operations: NsoOperationHandler<D>) -> Self {
        NsoMcpServer {
            operations,
            server_info: McpServerInfo::default(),
        }
    }

    /// Wrap an operation handler with custom server metadata.
    pub fn with_info(operations: NsoOperationHandler<D>, server_info: McpServerInfo) -> Self {
        NsoMcpServer {
            operations,
            server_info,
        }
    }

    /// Server metadata used for discovery and the `nso_server_info` tool.
    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }
}
