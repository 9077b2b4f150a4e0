//! Datastore seam: the narrow, typed interface this adapter talks to.
//!
//! The [`Datastore`] trait models the external transactional configuration
//! store (NSO's CDB in production). [`InMemoryDatastore`] is a seedable
//! reference implementation used by tests and the demo binary.

pub mod in_memory;
pub mod store;

pub use in_memory::{InMemoryDatastore, InMemoryError, OpenHandles, SyncOutcome};
pub use store::{ConfigView, Datastore, DeviceRecord, GroupSyncEntry, Session, SyncView};
