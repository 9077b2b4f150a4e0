//! Service tool schemas: type listings and per-device service lookups.

use serde_json::{Value, json};

/// Schema for the day-1 service listing tool.
pub fn list_day1_services_tool() -> Value {
    json!({
        "name": "nso_list_day1_services",
        "description": "List the day-1 service types configured in NSO",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

/// Schema for the full service listing tool.
pub fn list_services_tool() -> Value {
    json!({
        "name": "nso_list_services",
        "description": "List all service types configured in NSO",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

/// Schema for the per-device service listing tool.
pub fn get_device_services_tool() -> Value {
    json!({
        "name": "nso_get_device_services",
        "description": "List the keypaths of the services configured on one device; keypaths can be fed to nso_check_service_sync",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_name": {
                    "type": "string",
                    "description": "Name of the device to list services for"
                }
            },
            "required": ["device_name"]
        }
    })
}
