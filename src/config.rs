//! Server configuration from environment variables

use std::env;
use std::path::{Path, PathBuf};

use crate::event_store::EventStoreConfig;

/// Default listen address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
/// Default upload size limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which event store backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// `<data_dir>/employee_events.jsonl`
    File,
    /// Process memory, lost on exit
    Memory,
}

/// Runtime configuration for `payroll-server`
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub store: StoreKind,
    pub data_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            store: StoreKind::File,
            data_dir: PathBuf::from("data"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read `PAYROLL_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = lookup("PAYROLL_ADDR").unwrap_or(defaults.addr);

        let store = match lookup("PAYROLL_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("file") => StoreKind::File,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                tracing::warn!(value = other, "unknown PAYROLL_STORE, using file store");
                StoreKind::File
            }
        };

        let data_dir = lookup("PAYROLL_DATA_DIR")
            .map(|dir| resolve_dir(&dir))
            .unwrap_or(defaults.data_dir);

        let max_upload_bytes = match lookup("PAYROLL_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid PAYROLL_MAX_UPLOAD_BYTES, using default");
                defaults.max_upload_bytes
            }),
            None => defaults.max_upload_bytes,
        };

        Self {
            addr,
            store,
            data_dir,
            max_upload_bytes,
        }
    }

    /// Store configuration for the file-backed store
    pub fn event_store_config(&self) -> EventStoreConfig {
        EventStoreConfig::new(&self.data_dir)
    }
}

/// Resolve a relative directory against the current directory
fn resolve_dir(dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PAYROLL_ADDR", "0.0.0.0:9000"),
            ("PAYROLL_STORE", "memory"),
            ("PAYROLL_DATA_DIR", "/var/lib/payroll"),
            ("PAYROLL_MAX_UPLOAD_BYTES", "1024"),
        ]);
        assert_eq!(config.addr, "0.0.0.0:9000");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/payroll"));
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(
            config.event_store_config().events_path(),
            PathBuf::from("/var/lib/payroll/employee_events.jsonl")
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PAYROLL_STORE", "postgres"),
            ("PAYROLL_MAX_UPLOAD_BYTES", "lots"),
        ]);
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_relative_data_dir_is_resolved() {
        let config = config_from(&[("PAYROLL_DATA_DIR", "payroll-data")]);
        assert!(config.data_dir.is_absolute());
        assert!(config.data_dir.ends_with("payroll-data"));
    }
}
