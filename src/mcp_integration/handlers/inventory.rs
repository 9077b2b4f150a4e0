//! Inventory tool handlers: NED, device, and group lookups and filters.
//!
//! Each handler parses its JSON arguments, delegates to the operation layer,
//! and shapes the outcome into a structured result for the agent.

use super::{failure, require_str_arg, success};
use crate::datastore::Datastore;
use crate::mcp_integration::core::{NsoMcpServer, NsoToolResult};
use serde_json::{Value, json};

/// List registered NEDs, built-in driver ids excluded.
pub async fn handle_list_neds<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    _arguments: Value,
) -> NsoToolResult {
    match server.operations.ned_ids() {
        Ok(neds) => success(
            "list_neds",
            json!({"count": neds.len(), "neds": neds}),
            json!({}),
        ),
        Err(err) => failure("list_neds", &err),
    }
}

/// List the names of all managed devices.
pub async fn handle_list_devices<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    _arguments: Value,
) -> NsoToolResult {
    match server.operations.device_names() {
        Ok(devices) => success(
            "list_devices",
            json!({"count": devices.len(), "devices": devices}),
            json!({}),
        ),
        Err(err) => failure("list_devices", &err),
    }
}

/// List the names of all device groups.
pub async fn handle_list_device_groups<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    _arguments: Value,
) -> NsoToolResult {
    match server.operations.device_group_names() {
        Ok(groups) => success(
            "list_device_groups",
            json!({"count": groups.len(), "device_groups": groups}),
            json!({}),
        ),
        Err(err) => failure("list_device_groups", &err),
    }
}

/// Get one device's identity/platform snapshot.
pub async fn handle_get_device_info<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let device_name = match require_str_arg(&arguments, "device_name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.operations.device_info(&device_name) {
        Ok(info) => success(
            "get_device_info",
            json!(info),
            json!({"device": device_name}),
        ),
        Err(err) => failure("get_device_info", &err),
    }
}

/// List the member devices of a group.
pub async fn handle_list_group_devices<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let group_name = match require_str_arg(&arguments, "device_group_name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.operations.group_device_names(&group_name) {
        Ok(devices) => success(
            "list_group_devices",
            json!({"count": devices.len(), "devices": devices}),
            json!({"device_group": group_name}),
        ),
        Err(err) => failure("list_group_devices", &err),
    }
}

/// Filter devices by a case-insensitive platform-name substring.
pub async fn handle_list_devices_by_model<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let model = match require_str_arg(&arguments, "model") {
        Ok(model) => model,
        Err(result) => return result,
    };

    match server.operations.devices_by_model(&model) {
        Ok(devices) => success(
            "list_devices_by_model",
            json!({"count": devices.len(), "devices": devices}),
            json!({"model": model}),
        ),
        Err(err) => failure("list_devices_by_model", &err),
    }
}

/// Filter devices by model and version substrings, both required to match.
pub async fn handle_list_devices_by_model_and_version<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let model = match require_str_arg(&arguments, "model") {
        Ok(model) => model,
        Err(result) => return result,
    };
    let version = match require_str_arg(&arguments, "version") {
        Ok(version) => version,
        Err(result) => return result,
    };

    match server.operations.devices_by_model_and_version(&model, &version) {
        Ok(devices) => success(
            "list_devices_by_model_and_version",
            json!({"count": devices.len(), "devices": devices}),
            json!({"model": model, "version": version}),
        ),
        Err(err) => failure("list_devices_by_model_and_version", &err),
    }
}

/// Filter devices matching a model substring but not a version substring.
pub async fn handle_list_devices_by_model_excluding_version<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let model = match require_str_arg(&arguments, "model") {
        Ok(model) => model,
        Err(result) => return result,
    };
    let version = match require_str_arg(&arguments, "version") {
        Ok(version) => version,
        Err(result) => return result,
    };

    match server
        .operations
        .devices_by_model_excluding_version(&model, &version)
    {
        Ok(devices) => success(
            "list_devices_by_model_excluding_version",
            json!({"count": devices.len(), "devices": devices}),
            json!({"model": model, "excluded_version": version}),
        ),
        Err(err) => failure("list_devices_by_model_excluding_version", &err),
    }
}
