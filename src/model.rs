//! Response models returned to tool callers.
//!
//! These are flat, immutable value records built fresh for every query and
//! discarded once returned; nothing here is ever persisted. Validation is
//! limited to required-field presence during projection — there are no
//! cross-field checks.

use crate::datastore::DeviceRecord;
use crate::error::{NsoError, NsoResult};
use serde::Serialize;
use std::fmt;

/// How NSO talks to a device: which NED (Network Element Driver) family
/// its device-type binding selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NedType {
    Netconf,
    Cli,
    /// Neither a netconf-style nor a cli-style NED id is configured.
    Unknown,
}

impl fmt::Display for NedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NedType::Netconf => write!(f, "netconf"),
            NedType::Cli => write!(f, "cli"),
            NedType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Identity and platform snapshot of one managed device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// Device name, the unique key in the CDB device list
    pub name: String,
    /// Network address NSO connects to
    pub address: String,
    /// Vendor-reported software version
    pub platform_version: String,
    /// Vendor-reported platform name (e.g. ios-xr, junos)
    pub platform_name: String,
    /// Vendor-reported hardware model
    pub platform_model: String,
    /// NED family of the configured device-type binding
    pub ned_type: NedType,
    /// NED identifier with any namespace prefix stripped
    pub ned: String,
}

/// Outcome of one sync attempt on one device.
///
/// `result` is the store's own outcome label, passed through verbatim: it may
/// be a success marker, an in/out-of-sync state, or error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    /// Device the sync was attempted on
    pub name: String,
    /// Store-reported outcome, not re-validated or re-typed here
    pub result: String,
}

/// Strip a single namespace prefix from a driver or service identifier.
///
/// Identifiers look like `namespace:shortname` or bare `shortname`. Splitting
/// on `:` keeps the second segment iff exactly two segments exist; anything
/// else (no colon, or more than one) is kept as-is. The survivor is trimmed.
pub fn strip_ned_namespace(id: &str) -> String {
    let segments: Vec<&str> = id.split(':').collect();
    if segments.len() == 2 {
        segments[1].trim().to_string()
    } else {
        id.trim().to_string()
    }
}

fn require<'a>(
    field: &'static str,
    value: &'a Option<String>,
    device: &str,
) -> NsoResult<&'a str> {
    value.as_deref().ok_or_else(|| NsoError::IncompleteRecord {
        device: device.to_string(),
        field,
    })
}

/// Project one raw device record into a [`DeviceInfo`].
///
/// NED resolution: a netconf binding with a non-empty id wins; otherwise a
/// non-empty cli id; otherwise both `ned_type` and `ned` are `unknown`. The
/// record is assumed to have been fetched under a live read transaction.
/// A missing platform field is not recovered locally and propagates to the
/// caller as an operation failure.
pub fn build_device_info(device: &DeviceRecord) -> NsoResult<DeviceInfo> {
    let non_empty = |id: &Option<String>| -> Option<String> {
        id.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let (ned_type, ned) = if let Some(id) = non_empty(&device.netconf_ned_id) {
        (NedType::Netconf, strip_ned_namespace(&id))
    } else if let Some(id) = non_empty(&device.cli_ned_id) {
        (NedType::Cli, strip_ned_namespace(&id))
    } else {
        (NedType::Unknown, "unknown".to_string())
    };

    Ok(DeviceInfo {
        name: device.name.clone(),
        address: device.address.clone(),
        platform_version: require("platform.version", &device.platform_version, &device.name)?
            .to_string(),
        platform_name: require("platform.name", &device.platform_name, &device.name)?.to_string(),
        platform_model: require("platform.model", &device.platform_model, &device.name)?
            .to_string(),
        ned_type,
        ned,
    })
}
