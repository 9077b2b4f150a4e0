//! Traits describing the transactional configuration datastore.
//!
//! This is the seam between the adapter layer and the store client. Instead of
//! dynamic schema-path traversal, every collection the handlers touch gets an
//! explicit typed accessor on a view trait, so nothing above this line depends
//! on reflection or string-built paths (service keypaths excepted, which are
//! caller-supplied by contract).
//!
//! Two acquisition paths exist, mirroring the store's own API:
//!
//! * [`Datastore::read_transaction`] — a read-only single transaction bound to
//!   the configured [`Principal`], yielding a [`ConfigView`]. The view trait
//!   has no mutating methods, so writes inside a read scope are impossible by
//!   construction.
//! * [`Datastore::session`] then [`Session::start_write_transaction`] — a
//!   lower-level session with a write transaction inside it, yielding a
//!   [`SyncView`]. The write transaction is only a vehicle for invoking
//!   server-side sync actions; it never stages or commits a local edit buffer.
//!
//! All handles release their store-side resources when dropped. A handle is
//! private to one handler invocation: never shared, never cached, never
//! outliving its creating call.
//!
//! Every method is synchronous: the store client blocks the calling operation
//! until the store responds. Timeouts and retries, where needed, belong to the
//! store client, not this layer.

use crate::config::Principal;

/// Raw device record as read from the store's device list.
///
/// Platform fields are optional here because the store does not guarantee
/// them; projection into a response model fails if one is missing. NED ids
/// carry their namespace prefixes untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Unique key in the device list
    pub name: String,
    /// Network address the store connects to the device with
    pub address: String,
    pub platform_name: Option<String>,
    pub platform_version: Option<String>,
    pub platform_model: Option<String>,
    /// NED id of a netconf-style device-type binding, if configured
    pub netconf_ned_id: Option<String>,
    /// NED id of a cli-style device-type binding, if configured
    pub cli_ned_id: Option<String>,
}

impl DeviceRecord {
    /// Start a record with the two always-present identity fields.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        DeviceRecord {
            name: name.into(),
            address: address.into(),
            platform_name: None,
            platform_version: None,
            platform_model: None,
            netconf_ned_id: None,
            cli_ned_id: None,
        }
    }

    pub fn with_platform(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        self.platform_name = Some(name.into());
        self.platform_version = Some(version.into());
        self.platform_model = Some(model.into());
        self
    }

    pub fn with_netconf_ned(mut self, ned_id: impl Into<String>) -> Self {
        self.netconf_ned_id = Some(ned_id.into());
        self
    }

    pub fn with_cli_ned(mut self, ned_id: impl Into<String>) -> Self {
        self.cli_ned_id = Some(ned_id.into());
        self
    }
}

/// One member's outcome from a group-wide sync action.
///
/// The store reports these per member; a failure on one member does not stop
/// the others, and this layer passes the list through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSyncEntry {
    /// Member device name
    pub device: String,
    /// Store-reported outcome label or error text, verbatim
    pub result: String,
}

/// Read-only view of the configuration tree under a live transaction.
///
/// Collection accessors return entries in the store's own iteration order.
/// `check_*` methods invoke server-side check actions; their result labels
/// (`in-sync`, `out-of-sync`, `unsupported`, ...) are store-defined and
/// treated as opaque strings here.
pub trait ConfigView {
    /// Error type of the underlying store client
    type Error: std::error::Error + Send + Sync + 'static;

    /// All registered NED ids, namespace prefixes included.
    fn ned_ids(&self) -> Result<Vec<String>, Self::Error>;

    /// Names of all devices in the device list.
    fn device_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Existence check on the device list.
    fn device_exists(&self, name: &str) -> Result<bool, Self::Error>;

    /// Fetch one device record by exact key.
    fn device(&self, name: &str) -> Result<Option<DeviceRecord>, Self::Error>;

    /// All device records, in the store's iteration order.
    fn devices(&self) -> Result<Vec<DeviceRecord>, Self::Error>;

    /// Names of all device groups.
    fn device_group_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Existence check on the device-group list.
    fn device_group_exists(&self, name: &str) -> Result<bool, Self::Error>;

    /// Member device names of a group, in stored order.
    ///
    /// Callers check existence first; a missing group is a store error.
    fn device_group_members(&self, name: &str) -> Result<Vec<String>, Self::Error>;

    /// Namespaced type names of all configured services.
    fn service_type_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Raw keypaths of the services configured on one device.
    ///
    /// Callers check device existence first.
    fn device_service_paths(&self, name: &str) -> Result<Vec<String>, Self::Error>;

    /// Invoke the check-sync action on one device and return its result label.
    fn check_device_sync(&self, name: &str) -> Result<String, Self::Error>;

    /// Resolve a fully qualified keypath to a service node and invoke
    /// check-sync on it, returning the store's boolean-derived label.
    fn check_service_sync(&self, keypath: &str) -> Result<String, Self::Error>;
}

/// Write-transaction view: everything a read view offers plus sync actions.
pub trait SyncView: ConfigView {
    /// Invoke sync-from on one device and return the store's result label.
    fn sync_device(&self, name: &str) -> Result<String, Self::Error>;

    /// Invoke sync-from on a device group, returning one entry per member in
    /// the store's reported order.
    fn sync_device_group(&self, name: &str) -> Result<Vec<GroupSyncEntry>, Self::Error>;
}

/// An open lower-level session against the store.
///
/// Dropped after its write transaction, releasing the session resource.
pub trait Session {
    type Error: std::error::Error + Send + Sync + 'static;
    type WriteTx: SyncView<Error = Self::Error>;

    /// Start a write transaction inside this session.
    fn start_write_transaction(&self) -> Result<Self::WriteTx, Self::Error>;
}

/// The external transactional configuration datastore.
///
/// Implementations wrap a concrete store client (the production NSO client,
/// or [`InMemoryDatastore`](crate::datastore::InMemoryDatastore) for tests).
/// Acquisition is always per-operation; see the module docs for the resource
/// discipline handles must follow.
pub trait Datastore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;
    type ReadTx: ConfigView<Error = Self::Error>;
    type Session: Session<Error = Self::Error, WriteTx = Self::WriteTx>;
    type WriteTx: SyncView<Error = Self::Error>;

    /// Open a read-only single transaction as the given principal.
    fn read_transaction(&self, principal: &Principal) -> Result<Self::ReadTx, Self::Error>;

    /// Open a lower-level session as the given principal.
    fn session(&self, principal: &Principal) -> Result<Self::Session, Self::Error>;
}
