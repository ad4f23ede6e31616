//! # EMR Core
//!
//! Core logic for the EMR address utilities.
//!
//! This crate contains pure data operations:
//! - Loading the state → township → village address hierarchy from XML
//! - Drill-down queries and person address pre-fill
//! - Birthdate estimation from a stated age
//!
//! **No API concerns**: HTTP servers, routing and authentication belong in `api-rest` and
//! `api-shared`.

pub mod address;
pub mod birthdate;
pub mod config;
pub mod constants;
pub mod error;
pub mod person;

pub use address::{lists_states, Hierarchy, HierarchyStore, Selection, SelectionView};
pub use api_shared::AddressHierarchyRes;
pub use birthdate::birthdate_from_age;
pub use config::CoreConfig;
pub use constants::{ADDRESS_HIERARCHY_FILENAME, DEFAULT_APP_DATA_DIR, DEFAULT_REST_ADDR};
pub use error::{
    AddressError, AddressResult, AgeError, AgeResult, ConfigError, ConfigResult, PersonError,
    PersonResult,
};
pub use person::{JsonAddressBook, PersonAddress, PersonAddressSource};
