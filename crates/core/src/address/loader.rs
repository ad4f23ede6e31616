//! Address hierarchy source loading.
//!
//! The source is an XML document of the form
//!
//! ```xml
//! <country>
//!   <state name="Yangon">
//!     <township name="Dagon">
//!       <village name="A"/>
//!     </township>
//!   </state>
//! </country>
//! ```
//!
//! Elements are read in document order. Unrelated elements are ignored and a missing `name`
//! attribute reads as an empty string.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{AddressError, AddressResult};

/// A `state` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Region {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "township", default)]
    pub districts: Vec<District>,
}

/// A `township` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct District {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "village", default)]
    pub localities: Vec<Locality>,
}

/// A `village` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Locality {
    #[serde(rename = "@name", default)]
    pub name: String,
}

/// The `country` root.
#[derive(Debug, Default, Deserialize)]
struct Country {
    #[serde(rename = "state", default)]
    regions: Vec<Region>,
}

/// Parse regions from an XML string.
pub fn parse_regions(xml: &str) -> Result<Vec<Region>, quick_xml::DeError> {
    let country: Country = quick_xml::de::from_str(xml)?;
    Ok(country.regions)
}

/// Read and parse the regions of the source file at `path`.
///
/// The file handle lives only for the duration of this call.
///
/// # Errors
///
/// - `SourceUnavailable` if the file does not exist,
/// - `SourceRead` if it exists but cannot be opened,
/// - `MalformedSource` if it is not a parseable hierarchy document.
pub fn load_regions(path: &Path) -> AddressResult<Vec<Region>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AddressError::SourceUnavailable(path.to_path_buf())
        } else {
            AddressError::SourceRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let country: Country =
        quick_xml::de::from_reader(BufReader::new(file)).map_err(|source| {
            AddressError::MalformedSource {
                path: path.to_path_buf(),
                source,
            }
        })?;

    Ok(country.regions)
}
