//! Service tool handlers: type listings and per-device service lookups.

use super::{failure, require_str_arg, success};
use crate::datastore::Datastore;
use crate::mcp_integration::core::{NsoMcpServer, NsoToolResult};
use serde_json::{Value, json};

/// List day-1 service types.
pub async fn handle_list_day1_services<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    _arguments: Value,
) -> NsoToolResult {
    match server.operations.day1_services() {
        Ok(services) => success(
            "list_day1_services",
            json!({"count": services.len(), "services": services}),
            json!({}),
        ),
        Err(err) => failure("list_day1_services", &err),
    }
}

/// List all configured service types.
pub async fn handle_list_services<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    _arguments: Value,
) -> NsoToolResult {
    match server.operations.all_services() {
        Ok(services) => success(
            "list_services",
            json!({"count": services.len(), "services": services}),
            json!({}),
        ),
        Err(err) => failure("list_services", &err),
    }
}

/// List the service keypaths configured on one device.
pub async fn handle_get_device_services<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let device_name = match require_str_arg(&arguments, "device_name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.operations.device_services(&device_name) {
        Ok(services) => success(
            "get_device_services",
            json!({"count": services.len(), "services": services}),
            json!({"device": device_name}),
        ),
        Err(err) => failure("get_device_services", &err),
    }
}
