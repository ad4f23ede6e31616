//! In-memory address hierarchy with pre-indexed lookups.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use super::loader::{self, Region};
use crate::AddressResult;

#[derive(Debug, Clone, Default)]
struct DistrictIndex {
    names: Vec<String>,
    localities: HashMap<String, Vec<String>>,
}

/// The loaded Region → District → Locality tree, flattened into lookup tables.
///
/// Listings keep document order and duplicates. When a region, or a district within a region,
/// appears more than once, keyed lookups resolve to its last occurrence.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    regions: Vec<String>,
    districts: HashMap<String, DistrictIndex>,
}

impl Hierarchy {
    /// An empty hierarchy; every lookup returns an empty slice.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: Vec<Region>) -> Self {
        let mut hierarchy = Self::default();

        for region in regions {
            let mut index = DistrictIndex::default();
            for district in region.districts {
                let localities = district.localities.into_iter().map(|l| l.name).collect();
                index.localities.insert(district.name.clone(), localities);
                index.names.push(district.name);
            }
            hierarchy.regions.push(region.name.clone());
            hierarchy.districts.insert(region.name, index);
        }

        hierarchy
    }

    /// Load a hierarchy from the source file at `path`.
    pub fn load(path: &Path) -> AddressResult<Self> {
        loader::load_regions(path).map(Self::from_regions)
    }

    /// Load a hierarchy, degrading any failure to an empty hierarchy.
    ///
    /// Failures are logged; address data must never block the caller.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(hierarchy) => {
                tracing::info!(
                    "loaded address hierarchy from {} ({} states)",
                    path.display(),
                    hierarchy.regions.len()
                );
                hierarchy
            }
            Err(e) => {
                tracing::error!("{}; serving an empty address hierarchy", e);
                Self::empty()
            }
        }
    }

    /// State names in document order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Township names of `region`, or an empty slice if the region is unknown.
    pub fn districts(&self, region: &str) -> &[String] {
        self.districts
            .get(region)
            .map(|index| index.names.as_slice())
            .unwrap_or_default()
    }

    /// Village names of `district` within `region`, or an empty slice if the pair is unknown.
    pub fn localities(&self, region: &str, district: &str) -> &[String] {
        self.districts
            .get(region)
            .and_then(|index| index.localities.get(district))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl FromStr for Hierarchy {
    type Err = quick_xml::DeError;

    fn from_str(xml: &str) -> Result<Self, Self::Err> {
        loader::parse_regions(xml).map(Self::from_regions)
    }
}
