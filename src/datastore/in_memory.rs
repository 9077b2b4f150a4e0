//! In-memory datastore implementation.
//!
//! A thread-safe, seedable stand-in for the production store client, used by
//! the test suites and the demo binary. Check-sync labels and sync-from
//! outcomes are scriptable per device so failure paths can be exercised, and
//! every handle type counts itself while open so tests can assert that
//! transactions and sessions are released on every exit path.

use crate::config::Principal;
use crate::datastore::store::{
    ConfigView, Datastore, DeviceRecord, GroupSyncEntry, Session, SyncView,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Errors raised by the in-memory store client.
#[derive(Debug, thiserror::Error)]
pub enum InMemoryError {
    /// A keyed entry the store was asked to operate on does not exist
    #[error("item does not exist: {0}")]
    NoSuchEntry(String),

    /// A caller-supplied keypath could not be resolved to a node
    #[error("invalid keypath '{0}'")]
    InvalidKeypath(String),

    /// A scripted sync-from failure
    #[error("sync-from failed for device '{device}': {message}")]
    ActionFailed { device: String, message: String },

    /// Scripted connectivity failure, for exercising acquisition errors
    #[error("datastore connection refused")]
    Unavailable,
}

/// Scripted behavior of sync-from for one device.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// The action completes and reports this label
    Result(String),
    /// The action completes but the store reports failure text as the
    /// per-device result (group sync) or raises it (single-device sync)
    Fail(String),
}

/// Counts of currently open handles, for resource-discipline assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenHandles {
    pub read_transactions: usize,
    pub sessions: usize,
    pub write_transactions: usize,
}

#[derive(Default)]
struct HandleStats {
    open_read: AtomicUsize,
    open_sessions: AtomicUsize,
    open_write: AtomicUsize,
}

#[derive(Default)]
struct StoreData {
    ned_ids: Vec<String>,
    devices: Vec<DeviceRecord>,
    groups: Vec<(String, Vec<String>)>,
    service_types: Vec<String>,
    device_services: HashMap<String, Vec<String>>,
    sync_states: HashMap<String, String>,
    sync_outcomes: HashMap<String, SyncOutcome>,
    service_sync: HashMap<String, String>,
}

impl StoreData {
    fn device(&self, name: &str) -> Option<&DeviceRecord> {
        self.devices.iter().find(|d| d.name == name)
    }

    fn group(&self, name: &str) -> Option<&Vec<String>> {
        self.groups.iter().find(|(g, _)| g == name).map(|(_, m)| m)
    }

    fn require_device(&self, name: &str) -> Result<&DeviceRecord, InMemoryError> {
        self.device(name)
            .ok_or_else(|| InMemoryError::NoSuchEntry(format!("/devices/device{{{name}}}")))
    }

    fn check_device_sync(&self, name: &str) -> Result<String, InMemoryError> {
        let device = self.require_device(name)?;
        Ok(self
            .sync_states
            .get(&device.name)
            .cloned()
            .unwrap_or_else(|| "in-sync".to_string()))
    }

    fn sync_device(&self, name: &str) -> Result<String, InMemoryError> {
        let device = self.require_device(name)?;
        match self.sync_outcomes.get(&device.name) {
            Some(SyncOutcome::Result(label)) => Ok(label.clone()),
            Some(SyncOutcome::Fail(message)) => Err(InMemoryError::ActionFailed {
                device: device.name.clone(),
                message: message.clone(),
            }),
            None => Ok("true".to_string()),
        }
    }

    fn sync_device_group(&self, name: &str) -> Result<Vec<GroupSyncEntry>, InMemoryError> {
        let members = self
            .group(name)
            .ok_or_else(|| InMemoryError::NoSuchEntry(format!("/devices/device-group{{{name}}}")))?;
        // A failing member does not abort the rest; its failure text becomes
        // that member's result entry, as the store itself reports it.
        Ok(members
            .iter()
            .map(|member| {
                let result = match self.sync_outcomes.get(member) {
                    Some(SyncOutcome::Result(label)) => label.clone(),
                    Some(SyncOutcome::Fail(message)) => message.clone(),
                    None => "true".to_string(),
                };
                GroupSyncEntry {
                    device: member.clone(),
                    result,
                }
            })
            .collect())
    }

    fn check_service_sync(&self, keypath: &str) -> Result<String, InMemoryError> {
        if !keypath.starts_with('/') {
            return Err(InMemoryError::InvalidKeypath(keypath.to_string()));
        }
        self.service_sync
            .get(keypath)
            .cloned()
            .ok_or_else(|| InMemoryError::NoSuchEntry(keypath.to_string()))
    }
}

/// Seedable in-memory datastore.
///
/// Cloning shares the underlying data, so a seeded instance can be handed to
/// an operation handler while the test keeps a handle for assertions.
#[derive(Clone, Default)]
pub struct InMemoryDatastore {
    data: Arc<RwLock<StoreData>>,
    stats: Arc<HandleStats>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ned_id(&self, id: impl Into<String>) {
        self.write().ned_ids.push(id.into());
    }

    pub fn add_device(&self, record: DeviceRecord) {
        self.write().devices.push(record);
    }

    pub fn add_device_group(&self, name: impl Into<String>, members: &[&str]) {
        self.write()
            .groups
            .push((name.into(), members.iter().map(|m| m.to_string()).collect()));
    }

    pub fn add_service_type(&self, name: impl Into<String>) {
        self.write().service_types.push(name.into());
    }

    pub fn add_device_service(&self, device: &str, keypath: impl Into<String>) {
        self.write()
            .device_services
            .entry(device.to_string())
            .or_default()
            .push(keypath.into());
    }

    /// Script the label check-sync reports for one device.
    pub fn set_sync_state(&self, device: &str, label: impl Into<String>) {
        self.write()
            .sync_states
            .insert(device.to_string(), label.into());
    }

    /// Script the sync-from outcome for one device.
    pub fn set_sync_outcome(&self, device: &str, outcome: SyncOutcome) {
        self.write()
            .sync_outcomes
            .insert(device.to_string(), outcome);
    }

    /// Script the label check-sync reports for one service keypath.
    pub fn set_service_sync(&self, keypath: &str, label: impl Into<String>) {
        self.write()
            .service_sync
            .insert(keypath.to_string(), label.into());
    }

    /// Make subsequent transaction and session acquisitions fail.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Counts of handles currently open against this store.
    pub fn open_handles(&self) -> OpenHandles {
        OpenHandles {
            read_transactions: self.stats.open_read.load(Ordering::SeqCst),
            sessions: self.stats.open_sessions.load(Ordering::SeqCst),
            write_transactions: self.stats.open_write.load(Ordering::SeqCst),
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), InMemoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(InMemoryError::Unavailable)
        } else {
            Ok(())
        }
    }
}

/// Read-only transaction handle; decrements the open count on drop.
pub struct InMemoryReadTransaction {
    data: Arc<RwLock<StoreData>>,
    stats: Arc<HandleStats>,
}

impl Drop for InMemoryReadTransaction {
    fn drop(&mut self) {
        self.stats.open_read.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Session handle; decrements the open count on drop.
pub struct InMemorySession {
    data: Arc<RwLock<StoreData>>,
    stats: Arc<HandleStats>,
}

impl Drop for InMemorySession {
    fn drop(&mut self) {
        self.stats.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Write transaction handle; decrements the open count on drop.
pub struct InMemoryWriteTransaction {
    data: Arc<RwLock<StoreData>>,
    stats: Arc<HandleStats>,
}

impl Drop for InMemoryWriteTransaction {
    fn drop(&mut self) {
        self.stats.open_write.fetch_sub(1, Ordering::SeqCst);
    }
}

macro_rules! impl_config_view {
    ($handle:ty) => {
        impl ConfigView for $handle {
            type Error = InMemoryError;

            fn ned_ids(&self) -> Result<Vec<String>, InMemoryError> {
                Ok(self.read().ned_ids.clone())
            }

            fn device_names(&self) -> Result<Vec<String>, InMemoryError> {
                Ok(self.read().devices.iter().map(|d| d.name.clone()).collect())
            }

            fn device_exists(&self, name: &str) -> Result<bool, InMemoryError> {
                Ok(self.read().device(name).is_some())
            }

            fn device(&self, name: &str) -> Result<Option<DeviceRecord>, InMemoryError> {
                Ok(self.read().device(name).cloned())
            }

            fn devices(&self) -> Result<Vec<DeviceRecord>, InMemoryError> {
                Ok(self.read().devices.clone())
            }

            fn device_group_names(&self) -> Result<Vec<String>, InMemoryError> {
                Ok(self.read().groups.iter().map(|(g, _)| g.clone()).collect())
            }

            fn device_group_exists(&self, name: &str) -> Result<bool, InMemoryError> {
                Ok(self.read().group(name).is_some())
            }

            fn device_group_members(&self, name: &str) -> Result<Vec<String>, InMemoryError> {
                self.read().group(name).cloned().ok_or_else(|| {
                    InMemoryError::NoSuchEntry(format!("/devices/device-group{{{name}}}"))
                })
            }

            fn service_type_names(&self) -> Result<Vec<String>, InMemoryError> {
                Ok(self.read().service_types.clone())
            }

            fn device_service_paths(&self, name: &str) -> Result<Vec<String>, InMemoryError> {
                let data = self.read();
                data.require_device(name)?;
                Ok(data.device_services.get(name).cloned().unwrap_or_default())
            }

            fn check_device_sync(&self, name: &str) -> Result<String, InMemoryError> {
                self.read().check_device_sync(name)
            }

            fn check_service_sync(&self, keypath: &str) -> Result<String, InMemoryError> {
                self.read().check_service_sync(keypath)
            }
        }

        impl $handle {
            fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreData> {
                self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
            }
        }
    };
}

impl_config_view!(InMemoryReadTransaction);
impl_config_view!(InMemoryWriteTransaction);

impl SyncView for InMemoryWriteTransaction {
    fn sync_device(&self, name: &str) -> Result<String, InMemoryError> {
        self.read().sync_device(name)
    }

    fn sync_device_group(&self, name: &str) -> Result<Vec<GroupSyncEntry>, InMemoryError> {
        self.read().sync_device_group(name)
    }
}

impl Session for InMemorySession {
    type Error = InMemoryError;
    type WriteTx = InMemoryWriteTransaction;

    fn start_write_transaction(&self) -> Result<InMemoryWriteTransaction, InMemoryError> {
        self.stats.open_write.fetch_add(1, Ordering::SeqCst);
        Ok(InMemoryWriteTransaction {
            data: Arc::clone(&self.data),
            stats: Arc::clone(&self.stats),
        })
    }
}

impl Datastore for InMemoryDatastore {
    type Error = InMemoryError;
    type ReadTx = InMemoryReadTransaction;
    type Session = InMemorySession;
    type WriteTx = InMemoryWriteTransaction;

    fn read_transaction(&self, _principal: &Principal) -> Result<InMemoryReadTransaction, InMemoryError> {
        self.check_available()?;
        self.stats.open_read.fetch_add(1, Ordering::SeqCst);
        Ok(InMemoryReadTransaction {
            data: Arc::clone(&self.data),
            stats: Arc::clone(&self.stats),
        })
    }

    fn session(&self, _principal: &Principal) -> Result<InMemorySession, InMemoryError> {
        self.check_available()?;
        self.stats.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(InMemorySession {
            data: Arc::clone(&self.data),
            stats: Arc::clone(&self.stats),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal {
            user: "nsoadmin".to_string(),
            context: "system".to_string(),
        }
    }

    #[test]
    fn handles_are_counted_while_open_and_released_on_drop() {
        let store = InMemoryDatastore::new();
        {
            let _read = store.read_transaction(&principal()).unwrap();
            let session = store.session(&principal()).unwrap();
            let _write = session.start_write_transaction().unwrap();
            assert_eq!(
                store.open_handles(),
                OpenHandles {
                    read_transactions: 1,
                    sessions: 1,
                    write_transactions: 1
                }
            );
        }
        assert_eq!(
            store.open_handles(),
            OpenHandles {
                read_transactions: 0,
                sessions: 0,
                write_transactions: 0
            }
        );
    }

    #[test]
    fn unavailable_store_refuses_acquisition() {
        let store = InMemoryDatastore::new();
        store.set_unavailable(true);
        assert!(store.read_transaction(&principal()).is_err());
        assert!(store.session(&principal()).is_err());
        assert_eq!(store.open_handles().read_transactions, 0);
    }

    #[test]
    fn scripted_group_sync_reports_failures_per_member() {
        let store = InMemoryDatastore::new();
        store.add_device(DeviceRecord::new("a", "10.0.0.1"));
        store.add_device(DeviceRecord::new("b", "10.0.0.2"));
        store.add_device_group("core", &["a", "b"]);
        store.set_sync_outcome("b", SyncOutcome::Fail("connection refused".to_string()));

        let session = store.session(&principal()).unwrap();
        let tx = session.start_write_transaction().unwrap();
        let results = tx.sync_device_group("core").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result, "true");
        assert_eq!(results[1].result, "connection refused");
    }

    #[test]
    fn single_device_sync_failure_raises() {
        let store = InMemoryDatastore::new();
        store.add_device(DeviceRecord::new("a", "10.0.0.1"));
        store.set_sync_outcome("a", SyncOutcome::Fail("timeout".to_string()));

        let session = store.session(&principal()).unwrap();
        let tx = session.start_write_transaction().unwrap();
        assert!(matches!(
            tx.sync_device("a"),
            Err(InMemoryError::ActionFailed { .. })
        ));
    }

    #[test]
    fn relative_keypath_is_rejected() {
        let store = InMemoryDatastore::new();
        let tx = store.read_transaction(&principal()).unwrap();
        assert!(matches!(
            tx.check_service_sync("services/bad"),
            Err(InMemoryError::InvalidKeypath(_))
        ));
    }
}
