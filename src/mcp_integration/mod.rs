//! MCP integration: NSO CDB operations as AI-agent tools.
//!
//! This module exposes the operation handler's capabilities through the Model
//! Context Protocol so AI agents can discover and invoke them. It is layered
//! the same way throughout:
//!
//! * [`core`] — server wrapper and result types
//! * [`protocol`] — tool discovery, dispatch, and stdio transport
//! * [`handlers`] — per-tool argument parsing and result shaping
//! * [`tools`] — JSON Schema definitions for agent discovery
//!
//! Typed operation errors never cross the MCP boundary as Rust errors: the
//! handlers fold them into `success: false` results carrying a stable
//! `error_code`, which is what the hosting agent sees.

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod tools;


pub use core::{McpServerInfo, NsoMcpServer, NsoToolResult};
