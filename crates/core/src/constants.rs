//! Constants used throughout the EMR core crate.
//!
//! Filenames and defaults live here so the binaries and tests resolve the same locations.

/// Default application data directory when none is configured.
pub const DEFAULT_APP_DATA_DIR: &str = "app_data";

/// Filename of the address hierarchy inside the application data directory.
pub const ADDRESS_HIERARCHY_FILENAME: &str = "myanmaraddresshierarchy.xml";

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
