//! Error types for NSO MCP server operations.
//!
//! A small closed set of error kinds so callers and tests can match on the
//! failure category rather than parsing message strings. Datastore-client
//! failures are wrapped opaquely and propagated as-is; this layer never
//! reinterprets or retries them.

use std::fmt;

/// Result alias used throughout the operation and MCP layers.
pub type NsoResult<T> = Result<T, NsoError>;

/// The kind of CDB entity a lookup targeted.
///
/// Carried by [`NsoError::NotFound`] so error messages and tool results can
/// name what was missing, not just the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A managed device in the device list
    Device,
    /// A named device group
    DeviceGroup,
    /// A configured service instance, addressed by keypath
    Service,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Device => write!(f, "device"),
            EntityKind::DeviceGroup => write!(f, "device group"),
            EntityKind::Service => write!(f, "service"),
        }
    }
}

/// Main error type for NSO MCP server operations.
#[derive(Debug, thiserror::Error)]
pub enum NsoError {
    /// The requested entity key does not exist in the CDB at call time.
    ///
    /// Raised by handlers after an explicit existence check; never retried.
    #[error("{kind} '{key}' not found in NSO CDB")]
    NotFound { kind: EntityKind, key: String },

    /// A device record lacked a field the response model requires.
    ///
    /// Projection does not recover from this locally; it surfaces as an
    /// operation failure to the caller.
    #[error("device '{device}' record is missing required field '{field}'")]
    IncompleteRecord {
        device: String,
        field: &'static str,
    },

    /// Any error raised by the datastore client during transaction/session
    /// setup, query execution, or action invocation. Propagated verbatim.
    #[error("datastore error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid process-wide configuration at startup. Fatal, not per-call.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl NsoError {
    /// Wrap a datastore-client error for propagation.
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        NsoError::Upstream(Box::new(err))
    }

    /// Build a NotFound error for a missing entity key.
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        NsoError::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Stable machine-readable code for tool results.
    pub fn code(&self) -> &'static str {
        match self {
            NsoError::NotFound { .. } => "NOT_FOUND",
            NsoError::IncompleteRecord { .. } => "INCOMPLETE_RECORD",
            NsoError::Upstream(_) => "UPSTREAM_FAILURE",
            NsoError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_kind_and_key() {
        let err = NsoError::not_found(EntityKind::DeviceGroup, "ghost-group");
        let msg = err.to_string();
        assert!(msg.contains("device group"));
        assert!(msg.contains("ghost-group"));
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn incomplete_record_names_the_field() {
        let err = NsoError::IncompleteRecord {
            device: "r1".to_string(),
            field: "platform.version",
        };
        assert!(err.to_string().contains("platform.version"));
    }
}
