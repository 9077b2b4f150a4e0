//! # NSO MCP Server
//!
//! A thin MCP adapter over an NSO-style network-configuration datastore.
//! Each exposed tool opens its own transaction against the store, walks a
//! fixed schema path, and projects the result into a flat response shape —
//! device inventory, device groups, services, and sync actions.
//!
//! ## Architecture
//!
//! * [`datastore`] — the seam to the external store: typed view traits,
//!   transaction/session acquisition, and an in-memory reference backend.
//! * [`operations`] — framework-agnostic capability methods plus the
//!   transaction adapter that scopes one private handle per invocation.
//! * [`model`] — flat response records and the device-info projector.
//! * [`mcp_integration`] — tool schemas, dispatch, and result shaping for
//!   AI-agent callers.
//! * [`config`] — immutable process-wide configuration (operating principal,
//!   port, log directory) read once at startup.
//!
//! ## Quick start
//!
//! ```rust
//! use nso_mcp_server::{
//!     DeviceRecord, InMemoryDatastore, NsoMcpServer, NsoOperationHandler, ServerConfig,
//! };
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = InMemoryDatastore::new();
//! store.add_device(
//!     DeviceRecord::new("r1", "10.0.0.1")
//!         .with_platform("ios-xr", "7.2", "NCS5500")
//!         .with_netconf_ned("ned:iosxr"),
//! );
//!
//! let config = ServerConfig::from_lookup(|_| None).unwrap();
//! let handler = NsoOperationHandler::new(store, config.principal);
//! let server = NsoMcpServer::new(handler);
//!
//! let result = server
//!     .execute_tool("nso_get_device_info", json!({"device_name": "r1"}))
//!     .await;
//! assert!(result.success);
//! # }
//! ```

pub mod config;
pub mod datastore;
pub mod error;
pub mod mcp_integration;
pub mod model;
pub mod operations;

pub use config::{Principal, ServerConfig};
pub use datastore::{
    ConfigView, Datastore, DeviceRecord, GroupSyncEntry, InMemoryDatastore, Session, SyncView,
};
pub use error::{EntityKind, NsoError, NsoResult};
pub use mcp_integration::{McpServerInfo, NsoMcpServer, NsoToolResult};
pub use model::{DeviceInfo, NedType, SyncResult, build_device_info, strip_ned_namespace};
pub use operations::NsoOperationHandler;
