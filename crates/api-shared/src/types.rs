//! Wire types for the EMR REST API.
//!
//! JSON key names follow the field names the web fragments already consume, including the
//! lower-case `selectedtownship` and `selectedvillage`.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthRes {
    pub authenticated: bool,
}

/// Query parameters for an address hierarchy drill-down.
///
/// Absent and empty parameters mean the same thing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddressHierarchyQuery {
    /// Selected state; empty to list all states.
    pub state: Option<String>,
    /// Selected township within `state`; empty to list the townships of `state`.
    pub township: Option<String>,
    /// Person whose stored address pre-fills the state listing.
    #[serde(rename = "patientId")]
    pub patient_id: Option<String>,
}

/// One of the three address hierarchy responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AddressHierarchyRes {
    /// All states, plus the person's current selection when a person was given.
    States {
        state: Vec<String>,
        #[serde(
            rename = "selectedState",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        selected_state: Option<String>,
        #[serde(
            rename = "townshipListForSelectedState",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        township_list_for_selected_state: Option<Vec<String>>,
        #[serde(
            rename = "selectedtownship",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        selected_township: Option<String>,
        #[serde(
            rename = "villageListForSelectedTownship",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        village_list_for_selected_township: Option<Vec<String>>,
        #[serde(
            rename = "selectedvillage",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        selected_village: Option<String>,
    },
    /// Townships of the requested state.
    Townships { township: Vec<String> },
    /// Villages of the requested state and township.
    Villages { village: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReloadRes {
    /// Number of states in the freshly loaded hierarchy.
    pub regions: usize,
}

/// Query parameters for birthdate estimation.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BirthdateQuery {
    /// Age with a unit suffix: `y`, `m`, `w` or `d` (e.g. `30y`).
    pub age: String,
    /// Reference date as `YYYY-MM-DD`; defaults to today.
    pub now: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BirthdateRes {
    /// Estimated birthdate as `YYYY-MM-DD`.
    pub birthdate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_without_selection_has_only_state_key() {
        let res = AddressHierarchyRes::States {
            state: vec![],
            selected_state: None,
            township_list_for_selected_state: None,
            selected_township: None,
            village_list_for_selected_township: None,
            selected_village: None,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json, serde_json::json!({ "state": [] }));
    }

    #[test]
    fn test_states_with_selection_uses_fragment_key_names() {
        let res = AddressHierarchyRes::States {
            state: vec!["Yangon".into()],
            selected_state: Some("Yangon".into()),
            township_list_for_selected_state: Some(vec!["Dagon".into()]),
            selected_township: Some("Dagon".into()),
            village_list_for_selected_township: Some(vec!["A".into()]),
            selected_village: Some("A".into()),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": ["Yangon"],
                "selectedState": "Yangon",
                "townshipListForSelectedState": ["Dagon"],
                "selectedtownship": "Dagon",
                "villageListForSelectedTownship": ["A"],
                "selectedvillage": "A",
            })
        );
    }

    #[test]
    fn test_untagged_variants_deserialize_by_key() {
        let res: AddressHierarchyRes =
            serde_json::from_str(r#"{"township":["Dagon","Insein"]}"#).unwrap();
        assert_eq!(
            res,
            AddressHierarchyRes::Townships {
                township: vec!["Dagon".into(), "Insein".into()]
            }
        );

        let res: AddressHierarchyRes = serde_json::from_str(r#"{"village":[]}"#).unwrap();
        assert_eq!(res, AddressHierarchyRes::Villages { village: vec![] });
    }
}
