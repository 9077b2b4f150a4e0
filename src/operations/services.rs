//! Service operations: service-type listings and per-device service lookups.

use crate::datastore::{ConfigView, Datastore};
use crate::error::{EntityKind, NsoError, NsoResult};
use crate::model::strip_ned_namespace;
use crate::operations::NsoOperationHandler;
use log::info;

/// Marker substring identifying day-1 service types.
const DAY1_MARKER: &str = "-day1-";

impl<D: Datastore> NsoOperationHandler<D> {
    /// List day-1 service types, namespace prefixes stripped.
    pub fn day1_services(&self) -> NsoResult<Vec<String>> {
        info!("listing day1 services");
        self.with_read_transaction(|tx| {
            let names = tx.service_type_names().map_err(NsoError::upstream)?;
            Ok(names
                .iter()
                .filter(|name| name.contains(DAY1_MARKER))
                .map(|name| strip_ned_namespace(name))
                .collect())
        })
    }

    /// List all configured service types, namespace prefixes stripped.
    pub fn all_services(&self) -> NsoResult<Vec<String>> {
        info!("listing all services");
        self.with_read_transaction(|tx| {
            let names = tx.service_type_names().map_err(NsoError::upstream)?;
            Ok(names.iter().map(|name| strip_ned_namespace(name)).collect())
        })
    }

    /// List the raw keypaths of the services configured on one device.
    ///
    /// Unlike the type listings, keypaths are surfaced untouched — no prefix
    /// stripping, since callers feed them back into check-service-sync.
    pub fn device_services(&self, device_name: &str) -> NsoResult<Vec<String>> {
        let key = device_name.trim();
        info!("listing services for device {key}");
        self.with_read_transaction(|tx| {
            if !tx.device_exists(key).map_err(NsoError::upstream)? {
                return Err(NsoError::not_found(EntityKind::Device, key));
            }
            tx.device_service_paths(key).map_err(NsoError::upstream)
        })
    }
}
