//! Inventory operations: NED, device, and device-group lookups and filters.

use crate::datastore::{ConfigView, Datastore, DeviceRecord};
use crate::error::{EntityKind, NsoError, NsoResult};
use crate::model::{DeviceInfo, build_device_info, strip_ned_namespace};
use crate::operations::NsoOperationHandler;
use log::{debug, info};

/// Built-in NED ids never surfaced by the NED listing.
const EXCLUDED_NED_IDS: [&str; 3] = ["ned:lsa-netconf", "ned:netconf", "ned:snmp"];

fn excluded_ned(id: &str) -> bool {
    let canonical = id.trim().to_ascii_lowercase();
    EXCLUDED_NED_IDS.contains(&canonical.as_str())
}

fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

impl<D: Datastore> NsoOperationHandler<D> {
    /// List registered NED ids, excluding the built-ins, prefixes stripped.
    pub fn ned_ids(&self) -> NsoResult<Vec<String>> {
        info!("listing NED ids");
        self.with_read_transaction(|tx| {
            let ids = tx.ned_ids().map_err(NsoError::upstream)?;
            Ok(ids
                .iter()
                .filter(|id| !excluded_ned(id))
                .map(|id| strip_ned_namespace(id))
                .collect())
        })
    }

    /// List all device names.
    pub fn device_names(&self) -> NsoResult<Vec<String>> {
        info!("listing device names");
        self.with_read_transaction(|tx| tx.device_names().map_err(NsoError::upstream))
    }

    /// List all device-group names.
    pub fn device_group_names(&self) -> NsoResult<Vec<String>> {
        info!("listing device groups");
        self.with_read_transaction(|tx| tx.device_group_names().map_err(NsoError::upstream))
    }

    /// Get the identity/platform snapshot of one device.
    pub fn device_info(&self, device_name: &str) -> NsoResult<DeviceInfo> {
        let key = device_name.trim();
        info!("getting device info for {key}");
        self.with_read_transaction(|tx| {
            if !tx.device_exists(key).map_err(NsoError::upstream)? {
                debug!("device {key} not found");
                return Err(NsoError::not_found(EntityKind::Device, key));
            }
            let record = tx
                .device(key)
                .map_err(NsoError::upstream)?
                .ok_or_else(|| NsoError::not_found(EntityKind::Device, key))?;
            build_device_info(&record)
        })
    }

    /// List the member device names of a group.
    pub fn group_device_names(&self, group_name: &str) -> NsoResult<Vec<String>> {
        let key = group_name.trim();
        info!("listing devices in group {key}");
        self.with_read_transaction(|tx| {
            if !tx.device_group_exists(key).map_err(NsoError::upstream)? {
                return Err(NsoError::not_found(EntityKind::DeviceGroup, key));
            }
            tx.device_group_members(key).map_err(NsoError::upstream)
        })
    }

    /// Devices whose platform name contains `model`, case-insensitively.
    pub fn devices_by_model(&self, model: &str) -> NsoResult<Vec<DeviceInfo>> {
        let model = model.trim().to_lowercase();
        info!("listing devices for model '{model}'");
        self.filtered_devices(|device| contains_ci(device.platform_name.as_deref(), &model))
    }

    /// Devices matching both a model and a version substring.
    pub fn devices_by_model_and_version(
        &self,
        model: &str,
        version: &str,
    ) -> NsoResult<Vec<DeviceInfo>> {
        let model = model.trim().to_lowercase();
        let version = version.trim().to_lowercase();
        info!("listing devices for model '{model}' and version '{version}'");
        self.filtered_devices(|device| {
            contains_ci(device.platform_name.as_deref(), &model)
                && contains_ci(device.platform_version.as_deref(), &version)
        })
    }

    /// Devices matching a model substring but not a version substring.
    pub fn devices_by_model_excluding_version(
        &self,
        model: &str,
        version: &str,
    ) -> NsoResult<Vec<DeviceInfo>> {
        let model = model.trim().to_lowercase();
        let version = version.trim().to_lowercase();
        info!("listing devices for model '{model}' not on version '{version}'");
        self.filtered_devices(|device| {
            contains_ci(device.platform_name.as_deref(), &model)
                && !contains_ci(device.platform_version.as_deref(), &version)
        })
    }

    fn filtered_devices(
        &self,
        keep: impl Fn(&DeviceRecord) -> bool,
    ) -> NsoResult<Vec<DeviceInfo>> {
        self.with_read_transaction(|tx| {
            tx.devices()
                .map_err(NsoError::upstream)?
                .iter()
                .filter(|device| keep(device))
                .map(build_device_info)
                .collect()
        })
    }
}
