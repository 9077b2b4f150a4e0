//! JSON Schema definitions for every exposed tool.
//!
//! Consumed by the protocol layer for agent discovery; not intended for
//! direct use by application code. Each definition carries the tool name,
//! a description the agent reasons over, and an `inputSchema` describing
//! required and optional parameters.

pub mod inventory_schemas;
pub mod service_schemas;
pub mod sync_schemas;
pub mod system_schemas;
