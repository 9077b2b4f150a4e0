//! Sync tool schemas: check-sync queries and sync-from actions.

use serde_json::{Value, json};

/// Schema for the device check-sync tool.
pub fn check_device_sync_tool() -> Value {
    json!({
        "name": "nso_check_device_sync",
        "description": "Check whether a device's configuration is in sync with the NSO CDB. Returns the store's label: in-sync, out-of-sync, or unsupported if the device cannot be checked",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_name": {
                    "type": "string",
                    "description": "Name of the device to check"
                }
            },
            "required": ["device_name"]
        }
    })
}

/// Schema for the single-device sync tool.
pub fn sync_device_tool() -> Value {
    json!({
        "name": "nso_sync_device",
        "description": "Sync one device's running configuration into the NSO CDB (sync-from)",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_name": {
                    "type": "string",
                    "description": "Name of the device to sync"
                }
            },
            "required": ["device_name"]
        }
    })
}

/// Schema for the group sync tool.
pub fn sync_device_group_tool() -> Value {
    json!({
        "name": "nso_sync_device_group",
        "description": "Sync every device in an NSO device group, returning one result per member device",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_group_name": {
                    "type": "string",
                    "description": "Name of the device group to sync"
                }
            },
            "required": ["device_group_name"]
        }
    })
}

/// Schema for the service check-sync tool.
pub fn check_service_sync_tool() -> Value {
    json!({
        "name": "nso_check_service_sync",
        "description": "Check whether a service is in sync, addressed by NSO keypath of the form '/ncs:services/service-type{instance}'",
        "inputSchema": {
            "type": "object",
            "properties": {
                "keypath": {
                    "type": "string",
                    "description": "Fully qualified keypath of the service instance"
                }
            },
            "required": ["keypath"]
        }
    })
}
