//! Person address lookup.
//!
//! Person records belong to the host EMR. This module only needs the three address fields
//! that locate a person in the hierarchy, resolved from a person identifier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::address::Selection;
use crate::{PersonError, PersonResult};

/// The stored address fields of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddress {
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub county_district: Option<String>,
    #[serde(default)]
    pub city_village: Option<String>,
}

impl PersonAddress {
    pub fn selection(&self) -> Selection {
        Selection {
            region: self.state_province.clone(),
            district: self.county_district.clone(),
            locality: self.city_village.clone(),
        }
    }
}

/// Resolves a person identifier to that person's stored address.
pub trait PersonAddressSource: Send + Sync {
    /// Returns `Ok(None)` when no person has this identifier.
    fn address_for(&self, person_id: &str) -> PersonResult<Option<PersonAddress>>;
}

/// Person addresses read from a JSON object keyed by person identifier.
///
/// ```json
/// { "1001": { "stateProvince": "Yangon", "countyDistrict": "Dagon", "cityVillage": "A" } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonAddressBook {
    addresses: HashMap<String, PersonAddress>,
}

impl JsonAddressBook {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_addresses(addresses: HashMap<String, PersonAddress>) -> Self {
        Self { addresses }
    }

    pub fn load(path: &Path) -> PersonResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| PersonError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let addresses = serde_json::from_str(&contents).map_err(PersonError::Deserialization)?;

        let book = Self::from_addresses(addresses);
        tracing::info!(
            "loaded {} person addresses from {}",
            book.len(),
            path.display()
        );
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl PersonAddressSource for JsonAddressBook {
    fn address_for(&self, person_id: &str) -> PersonResult<Option<PersonAddress>> {
        Ok(self.addresses.get(person_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_camel_case_fields() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("persons.json");
        fs::write(
            &path,
            r#"{
                "1001": { "stateProvince": "Yangon", "countyDistrict": "Dagon", "cityVillage": "A" },
                "1002": { "stateProvince": "Mandalay" }
            }"#,
        )
        .unwrap();

        let book = JsonAddressBook::load(&path).expect("should load");
        assert_eq!(book.len(), 2);

        let address = book.address_for("1001").unwrap().expect("known person");
        assert_eq!(
            address.selection(),
            Selection {
                region: Some("Yangon".into()),
                district: Some("Dagon".into()),
                locality: Some("A".into()),
            }
        );

        let partial = book.address_for("1002").unwrap().expect("known person");
        assert_eq!(partial.county_district, None);
    }

    #[test]
    fn test_unknown_person_is_none() {
        let book = JsonAddressBook::empty();
        assert!(book.is_empty());
        assert_eq!(book.address_for("missing").unwrap(), None);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = JsonAddressBook::load(&temp_dir.path().join("absent.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, PersonError::FileRead { .. }));

        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = JsonAddressBook::load(&path).expect_err("wrong shape should fail");
        assert!(matches!(err, PersonError::Deserialization(_)));
    }
}
