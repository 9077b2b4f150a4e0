//! Inventory tool schemas: NEDs, devices, and device groups.

use serde_json::{Value, json};

/// Schema for the NED listing tool.
pub fn list_neds_tool() -> Value {
    json!({
        "name": "nso_list_neds",
        "description": "List the NEDs (Network Element Drivers) registered in NSO, excluding built-in drivers",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

/// Schema for the device-name listing tool.
pub fn list_devices_tool() -> Value {
    json!({
        "name": "nso_list_devices",
        "description": "List the names of all network devices managed by NSO",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

/// Schema for the device-group listing tool.
pub fn list_device_groups_tool() -> Value {
    json!({
        "name": "nso_list_device_groups",
        "description": "List the names of all NSO device groups",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

/// Schema for the device-info tool.
pub fn get_device_info_tool() -> Value {
    json!({
        "name": "nso_get_device_info",
        "description": "Get identity and platform information for one device: address, platform name/version/model, NED type and NED",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_name": {
                    "type": "string",
                    "description": "Name of the device in the NSO device list"
                }
            },
            "required": ["device_name"]
        }
    })
}

/// Schema for the group-membership listing tool.
pub fn list_group_devices_tool() -> Value {
    json!({
        "name": "nso_list_group_devices",
        "description": "List the device names belonging to an NSO device group",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_group_name": {
                    "type": "string",
                    "description": "Name of the device group"
                }
            },
            "required": ["device_group_name"]
        }
    })
}

/// Schema for the model filter tool.
pub fn list_devices_by_model_tool() -> Value {
    json!({
        "name": "nso_list_devices_by_model",
        "description": "List devices whose platform name contains the given model string (case-insensitive), e.g. junos, arcos, nokia, saos, ios, ios-xe, ios-xr",
        "inputSchema": {
            "type": "object",
            "properties": {
                "model": {
                    "type": "string",
                    "description": "Model substring to match against the platform name"
                }
            },
            "required": ["model"]
        }
    })
}

/// Schema for the model+version filter tool.
pub fn list_devices_by_model_and_version_tool() -> Value {
    json!({
        "name": "nso_list_devices_by_model_and_version",
        "description": "List devices matching both a model substring and a software version substring (case-insensitive)",
        "inputSchema": {
            "type": "object",
            "properties": {
                "model": {
                    "type": "string",
                    "description": "Model substring to match against the platform name"
                },
                "version": {
                    "type": "string",
                    "description": "Version substring to match against the platform version"
                }
            },
            "required": ["model", "version"]
        }
    })
}

/// Schema for the model-excluding-version filter tool.
pub fn list_devices_by_model_excluding_version_tool() -> Value {
    json!({
        "name": "nso_list_devices_by_model_excluding_version",
        "description": "List devices matching a model substring but NOT running the given version, e.g. all ios-xr devices not on 7.2",
        "inputSchema": {
            "type": "object",
            "properties": {
                "model": {
                    "type": "string",
                    "description": "Model substring to match against the platform name"
                },
                "version": {
                    "type": "string",
                    "description": "Version substring the platform version must not contain"
                }
            },
            "required": ["model", "version"]
        }
    })
}
