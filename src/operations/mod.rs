//! Framework-agnostic operation handler for NSO CDB capabilities.
//!
//! [`NsoOperationHandler`] owns the datastore seam and the fixed operating
//! principal, and implements every exposed capability as a typed method:
//! inventory lookups and filters in [`inventory`], sync actions in [`sync`],
//! service listings in [`services`]. The MCP layer is one thin caller of these
//! methods; nothing here depends on a transport.
//!
//! Transaction discipline lives in this module: the two `with_*` wrappers are
//! the only way operations reach the store, and each scopes one private
//! handle (or session + write transaction pair) to one invocation, released
//! on every exit path — normal return, lookup miss, or error.

pub mod inventory;
pub mod services;
pub mod sync;

use crate::config::Principal;
use crate::datastore::{Datastore, Session};
use crate::error::{NsoError, NsoResult};

/// Operation handler over a datastore, acting as one fixed principal.
///
/// Holds no per-call state and no cache; every method acquires and releases
/// its own transaction, so a handler can be shared across concurrent callers.
pub struct NsoOperationHandler<D: Datastore> {
    store: D,
    principal: Principal,
}

impl<D: Datastore> NsoOperationHandler<D> {
    /// Create a handler acting as the given principal.
    pub fn new(store: D, principal: Principal) -> Self {
        NsoOperationHandler { store, principal }
    }

    /// The fixed operating identity every transaction is opened under.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Run `body` inside a read-only single transaction.
    ///
    /// The transaction is released when this returns, whatever `body` did.
    /// Acquisition failure surfaces as [`NsoError::Upstream`].
    pub(crate) fn with_read_transaction<T>(
        &self,
        body: impl FnOnce(&D::ReadTx) -> NsoResult<T>,
    ) -> NsoResult<T> {
        let tx = self
            .store
            .read_transaction(&self.principal)
            .map_err(NsoError::upstream)?;
        let outcome = body(&tx);
        drop(tx);
        outcome
    }

    /// Run `body` inside a write transaction on a fresh session.
    ///
    /// The transaction is released before the session, both on every exit
    /// path. The write transaction exists to invoke server-side sync actions;
    /// no local edits are staged or committed through it.
    pub(crate) fn with_write_transaction<T>(
        &self,
        body: impl FnOnce(&D::WriteTx) -> NsoResult<T>,
    ) -> NsoResult<T> {
        let session = self
            .store
            .session(&self.principal)
            .map_err(NsoError::upstream)?;
        let tx = session
            .start_write_transaction()
            .map_err(NsoError::upstream)?;
        let outcome = body(&tx);
        drop(tx);
        drop(session);
        outcome
    }
}
