use super::Hierarchy;

/// A person's recorded path through the hierarchy.
///
/// Values are opaque and matched exactly against loaded names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub region: Option<String>,
    pub district: Option<String>,
    pub locality: Option<String>,
}

/// A selection pre-filled with the options valid at each level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionView {
    pub selected_region: String,
    pub district_options: Vec<String>,
    pub selected_district: String,
    pub locality_options: Vec<String>,
    pub selected_locality: String,
}

/// Resolve a selection against the hierarchy.
///
/// Returns `None` when there is no selection. Values missing from the hierarchy produce empty
/// option lists, and unset values render as empty strings.
pub fn resolve(hierarchy: &Hierarchy, selection: Option<&Selection>) -> Option<SelectionView> {
    let selection = selection?;

    let region = selection.region.as_deref().unwrap_or_default();
    let district = selection.district.as_deref().unwrap_or_default();
    let locality = selection.locality.as_deref().unwrap_or_default();

    Some(SelectionView {
        selected_region: region.to_owned(),
        district_options: hierarchy.districts(region).to_vec(),
        selected_district: district.to_owned(),
        locality_options: hierarchy.localities(region, district).to_vec(),
        selected_locality: locality.to_owned(),
    })
}
