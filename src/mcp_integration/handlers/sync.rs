//! Sync tool handlers: check-sync queries and sync-from actions.

use super::{failure, require_str_arg, success};
use crate::datastore::Datastore;
use crate::mcp_integration::core::{NsoMcpServer, NsoToolResult};
use serde_json::{Value, json};

/// Check whether one device is in sync with the CDB.
pub async fn handle_check_device_sync<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let device_name = match require_str_arg(&arguments, "device_name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.operations.check_device_sync(&device_name) {
        Ok(status) => success(
            "check_device_sync",
            json!({"device": device_name, "sync_status": status}),
            json!({"device": device_name}),
        ),
        Err(err) => failure("check_device_sync", &err),
    }
}

/// Sync one device's configuration into the CDB.
pub async fn handle_sync_device<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let device_name = match require_str_arg(&arguments, "device_name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.operations.sync_device(&device_name) {
        Ok(result) => success("sync_device", json!(result), json!({"device": device_name})),
        Err(err) => failure("sync_device", &err),
    }
}

/// Sync every member of a device group, reporting per-member outcomes.
pub async fn handle_sync_device_group<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let group_name = match require_str_arg(&arguments, "device_group_name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.operations.sync_device_group(&group_name) {
        Ok(results) => success(
            "sync_device_group",
            json!({"count": results.len(), "results": results}),
            json!({"device_group": group_name}),
        ),
        Err(err) => failure("sync_device_group", &err),
    }
}

/// Check sync on a service addressed by keypath.
pub async fn handle_check_service_sync<D: Datastore + 'static>(
    server: &NsoMcpServer<D>,
    arguments: Value,
) -> NsoToolResult {
    let keypath = match require_str_arg(&arguments, "keypath") {
        Ok(path) => path,
        Err(result) => return result,
    };

    match server.operations.check_service_sync(&keypath) {
        Ok(status) => success(
            "check_service_sync",
            json!({"keypath": keypath, "in_sync": status}),
            json!({"keypath": keypath}),
        ),
        Err(err) => failure("check_service_sync", &err),
    }
}
