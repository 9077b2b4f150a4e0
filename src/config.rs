//! Process-wide configuration, read once at startup.
//!
//! All operating parameters come from environment variables with documented
//! defaults. The resulting [`ServerConfig`] is immutable and passed to the
//! components that need it; handler logic never performs ambient environment
//! lookups of its own.
//!
//! | Variable | Default | Purpose |
//! |---|---|---|
//! | `NSO_USER` | `nsoadmin` | operating username for every transaction |
//! | `NSO_CONTEXT` | `system` | operating context for every transaction |
//! | `API_PORT` | `8000` | listening port for the hosting transport |
//! | `LOG_DIRECTORY` | `/var/log/ncs` | directory for server log output |

use crate::error::{NsoError, NsoResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_USER: &str = "nsoadmin";
const DEFAULT_CONTEXT: &str = "system";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_DIRECTORY: &str = "/var/log/ncs";

/// The fixed identity every datastore transaction is opened under.
///
/// Caller-supplied identity switching is deliberately not supported: every
/// tool invocation acts as this configured principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// NSO username the transaction runs as
    pub user: String,
    /// NSO context name (e.g. `system`)
    pub context: String,
}

/// Immutable server configuration constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Operating identity for all datastore transactions
    pub principal: Principal,
    /// Port the hosting transport listens on
    pub port: u16,
    /// Directory log files are written to
    pub log_directory: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Missing variables fall back to their defaults; a present but invalid
    /// value (e.g. a non-numeric `API_PORT`) is a fatal startup error.
    pub fn from_env() -> NsoResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Separated from [`from_env`](Self::from_env) so tests can supply
    /// variables without mutating process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> NsoResult<Self> {
        let user = lookup("NSO_USER").unwrap_or_else(|| DEFAULT_USER.to_string());
        let context = lookup("NSO_CONTEXT").unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

        let port = match lookup("API_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| NsoError::Config {
                message: format!("API_PORT must be a port number, got '{raw}'"),
            })?,
            None => DEFAULT_PORT,
        };

        let log_directory = lookup("LOG_DIRECTORY")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIRECTORY));

        if user.trim().is_empty() {
            return Err(NsoError::Config {
                message: "NSO_USER must not be empty".to_string(),
            });
        }
        if context.trim().is_empty() {
            return Err(NsoError::Config {
                message: "NSO_CONTEXT must not be empty".to_string(),
            });
        }

        Ok(ServerConfig {
            principal: Principal { user, context },
            port,
            log_directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.principal.user, "nsoadmin");
        assert_eq!(config.principal.context, "system");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_directory, PathBuf::from("/var/log/ncs"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ServerConfig::from_lookup(|name| match name {
            "NSO_USER" => Some("automation".to_string()),
            "NSO_CONTEXT" => Some("webui".to_string()),
            "API_PORT" => Some("9000".to_string()),
            "LOG_DIRECTORY" => Some("/tmp/ncs-logs".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.principal.user, "automation");
        assert_eq!(config.principal.context, "webui");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_directory, PathBuf::from("/tmp/ncs-logs"));
    }

    #[test]
    fn invalid_port_is_a_fatal_config_error() {
        let result = ServerConfig::from_lookup(|name| match name {
            "API_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        match result {
            Err(NsoError::Config { message }) => assert!(message.contains("API_PORT")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_user_is_rejected() {
        let result = ServerConfig::from_lookup(|name| match name {
            "NSO_USER" => Some("   ".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(NsoError::Config { .. })));
    }
}
