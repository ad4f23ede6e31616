//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Environment variables are read by the binaries only; nothing in
//! the request path consults the process environment.

use crate::constants::ADDRESS_HIERARCHY_FILENAME;
use crate::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    address_hierarchy_file: PathBuf,
    person_address_file: Option<PathBuf>,
    reload_on_change: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The hierarchy file does not have to exist yet (a missing file serves an empty
    /// hierarchy), but the path must not name a directory.
    pub fn new(
        address_hierarchy_file: PathBuf,
        person_address_file: Option<PathBuf>,
        reload_on_change: bool,
    ) -> ConfigResult<Self> {
        if address_hierarchy_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidInput(
                "address hierarchy file path cannot be empty".into(),
            ));
        }
        if address_hierarchy_file.is_dir() {
            return Err(ConfigError::InvalidInput(format!(
                "address hierarchy path is a directory: {}",
                address_hierarchy_file.display()
            )));
        }

        Ok(Self {
            address_hierarchy_file,
            person_address_file,
            reload_on_change,
        })
    }

    pub fn address_hierarchy_file(&self) -> &Path {
        &self.address_hierarchy_file
    }

    pub fn person_address_file(&self) -> Option<&Path> {
        self.person_address_file.as_deref()
    }

    pub fn reload_on_change(&self) -> bool {
        self.reload_on_change
    }
}

/// Resolve the address hierarchy file without reading environment variables.
///
/// An explicit override wins; otherwise the well-known filename inside the application data
/// directory is used.
pub fn resolve_address_hierarchy_file(
    app_data_dir: &Path,
    override_file: Option<PathBuf>,
) -> PathBuf {
    override_file
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| app_data_dir.join(ADDRESS_HIERARCHY_FILENAME))
}

/// Parse the reload-on-change flag from an optional string value.
///
/// If `value` is `None` or empty/whitespace, reloading is disabled.
pub fn reload_on_change_from_env_value(value: Option<String>) -> ConfigResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None | Some("0") | Some("false") | Some("no") | Some("off") => Ok(false),
        Some("1") | Some("true") | Some("yes") | Some("on") => Ok(true),
        Some(other) => Err(ConfigError::InvalidInput(format!(
            "EMR_ADDRESS_RELOAD_ON_CHANGE must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_uses_app_data_dir_by_default() {
        let path = resolve_address_hierarchy_file(Path::new("/srv/emr"), None);
        assert_eq!(path, Path::new("/srv/emr").join(ADDRESS_HIERARCHY_FILENAME));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let path = resolve_address_hierarchy_file(
            Path::new("/srv/emr"),
            Some(PathBuf::from("/etc/emr/address.xml")),
        );
        assert_eq!(path, PathBuf::from("/etc/emr/address.xml"));

        let path = resolve_address_hierarchy_file(Path::new("/srv/emr"), Some(PathBuf::new()));
        assert_eq!(path, Path::new("/srv/emr").join(ADDRESS_HIERARCHY_FILENAME));
    }

    #[test]
    fn test_reload_flag_parsing() {
        assert!(!reload_on_change_from_env_value(None).unwrap());
        assert!(!reload_on_change_from_env_value(Some("  ".into())).unwrap());
        assert!(!reload_on_change_from_env_value(Some("false".into())).unwrap());
        assert!(reload_on_change_from_env_value(Some("TRUE".into())).unwrap());
        assert!(reload_on_change_from_env_value(Some("1".into())).unwrap());
        assert!(reload_on_change_from_env_value(Some("sometimes".into())).is_err());
    }

    #[test]
    fn test_config_rejects_directory_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = CoreConfig::new(temp_dir.path().to_path_buf(), None, false)
            .expect_err("directory path should be rejected");
        assert!(matches!(err, ConfigError::InvalidInput(_)));

        assert!(CoreConfig::new(PathBuf::new(), None, false).is_err());
    }

    #[test]
    fn test_config_accepts_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = temp_dir.path().join(ADDRESS_HIERARCHY_FILENAME);
        let cfg = CoreConfig::new(file.clone(), None, true).expect("missing file is allowed");
        assert_eq!(cfg.address_hierarchy_file(), file);
        assert!(cfg.person_address_file().is_none());
        assert!(cfg.reload_on_change());
    }
}
