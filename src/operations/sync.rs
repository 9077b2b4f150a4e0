//! Sync operations: check-sync queries and sync-from actions.
//!
//! Check operations run under a read-only transaction; sync-from actions take
//! the session + write-transaction path. Result labels are store-defined
//! strings (`in-sync`, `out-of-sync`, `unsupported`, error text, ...) and are
//! passed through verbatim, never re-derived here.

use crate::datastore::{ConfigView, Datastore, SyncView};
use crate::error::{EntityKind, NsoError, NsoResult};
use crate::model::SyncResult;
use crate::operations::NsoOperationHandler;
use log::info;

impl<D: Datastore> NsoOperationHandler<D> {
    /// Report whether a device's configuration is in sync with the CDB.
    ///
    /// The device is assumed to exist; a store-side failure (unknown device,
    /// action unsupported) propagates as [`NsoError::Upstream`].
    pub fn check_device_sync(&self, device_name: &str) -> NsoResult<String> {
        let key = device_name.trim();
        info!("checking sync status for device {key}");
        self.with_read_transaction(|tx| tx.check_device_sync(key).map_err(NsoError::upstream))
    }

    /// Check sync on a service addressed by a fully qualified keypath.
    ///
    /// Returns the store's boolean-derived label. An unresolvable keypath
    /// propagates as a store-side failure.
    pub fn check_service_sync(&self, keypath: &str) -> NsoResult<String> {
        let path = keypath.trim();
        info!("checking sync status for service {path}");
        self.with_read_transaction(|tx| tx.check_service_sync(path).map_err(NsoError::upstream))
    }

    /// Sync one device's configuration from the device into the CDB.
    pub fn sync_device(&self, device_name: &str) -> NsoResult<SyncResult> {
        let key = device_name.trim();
        info!("syncing configuration for device {key}");
        self.with_write_transaction(|tx| {
            let result = tx.sync_device(key).map_err(NsoError::upstream)?;
            Ok(SyncResult {
                name: key.to_string(),
                result,
            })
        })
    }

    /// Sync every member of a device group, one result per member.
    ///
    /// The store reports member outcomes individually; a failure on one
    /// member does not suppress the others, and the reported order is kept.
    pub fn sync_device_group(&self, group_name: &str) -> NsoResult<Vec<SyncResult>> {
        let key = group_name.trim();
        info!("syncing configuration for device group {key}");
        self.with_write_transaction(|tx| {
            if !tx.device_group_exists(key).map_err(NsoError::upstream)? {
                return Err(NsoError::not_found(EntityKind::DeviceGroup, key));
            }
            let entries = tx.sync_device_group(key).map_err(NsoError::upstream)?;
            Ok(entries
                .into_iter()
                .map(|entry| SyncResult {
                    name: entry.device,
                    result: entry.result,
                })
                .collect())
        })
    }
}
