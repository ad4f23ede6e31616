use api_shared::AddressHierarchyRes;

use super::selection::{self, Selection, SelectionView};
use super::Hierarchy;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Whether a query for `state` answers with the state listing, the only response that carries
/// a person's selection.
pub fn lists_states(state: Option<&str>) -> bool {
    non_empty(state).is_none()
}

/// Answer an address hierarchy drill-down.
///
/// - no `state`: all states, with the person's selection block when `selection` is given;
/// - no `township`: the townships of `state`;
/// - otherwise: the villages of `state` and `township`.
///
/// Absent and empty parameters are treated the same. Unknown names give empty lists.
pub fn handle(
    hierarchy: &Hierarchy,
    state: Option<&str>,
    township: Option<&str>,
    selection: Option<&Selection>,
) -> AddressHierarchyRes {
    let Some(state) = non_empty(state) else {
        return states_response(hierarchy, selection::resolve(hierarchy, selection));
    };

    match non_empty(township) {
        None => AddressHierarchyRes::Townships {
            township: hierarchy.districts(state).to_vec(),
        },
        Some(township) => AddressHierarchyRes::Villages {
            village: hierarchy.localities(state, township).to_vec(),
        },
    }
}

fn states_response(hierarchy: &Hierarchy, view: Option<SelectionView>) -> AddressHierarchyRes {
    let state = hierarchy.regions().to_vec();
    match view {
        None => AddressHierarchyRes::States {
            state,
            selected_state: None,
            township_list_for_selected_state: None,
            selected_township: None,
            village_list_for_selected_township: None,
            selected_village: None,
        },
        Some(view) => AddressHierarchyRes::States {
            state,
            selected_state: Some(view.selected_region),
            township_list_for_selected_state: Some(view.district_options),
            selected_township: Some(view.selected_district),
            village_list_for_selected_township: Some(view.locality_options),
            selected_village: Some(view.selected_locality),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hierarchy() -> Hierarchy {
        r#"<country>
             <state name="Yangon">
               <township name="Dagon"><village name="A"/><village name="B"/></township>
               <township name="Insein"/>
             </state>
             <state name="Mandalay"/>
           </country>"#
            .parse()
            .unwrap()
    }

    fn to_json(res: &AddressHierarchyRes) -> serde_json::Value {
        serde_json::to_value(res).unwrap()
    }

    #[test]
    fn test_empty_hierarchy_lists_no_states() {
        let res = handle(&Hierarchy::empty(), Some(""), Some(""), None);
        assert_eq!(to_json(&res), json!({ "state": [] }));
    }

    #[test]
    fn test_state_lists_townships() {
        let res = handle(&hierarchy(), Some("Yangon"), Some(""), None);
        assert_eq!(to_json(&res), json!({ "township": ["Dagon", "Insein"] }));
    }

    #[test]
    fn test_state_and_township_list_villages() {
        let res = handle(&hierarchy(), Some("Yangon"), Some("Dagon"), None);
        assert_eq!(to_json(&res), json!({ "village": ["A", "B"] }));
    }

    #[test]
    fn test_person_selection_is_merged_into_state_listing() {
        let selection = Selection {
            region: Some("Yangon".into()),
            district: Some("Dagon".into()),
            locality: Some("A".into()),
        };
        let res = handle(&hierarchy(), Some(""), Some(""), Some(&selection));
        assert_eq!(
            to_json(&res),
            json!({
                "state": ["Yangon", "Mandalay"],
                "selectedState": "Yangon",
                "townshipListForSelectedState": ["Dagon", "Insein"],
                "selectedtownship": "Dagon",
                "villageListForSelectedTownship": ["A", "B"],
                "selectedvillage": "A",
            })
        );
    }

    #[test]
    fn test_selection_is_ignored_when_drilling_down() {
        let selection = Selection {
            region: Some("Yangon".into()),
            ..Selection::default()
        };
        let res = handle(&hierarchy(), Some("Yangon"), None, Some(&selection));
        assert_eq!(to_json(&res), json!({ "township": ["Dagon", "Insein"] }));
    }

    #[test]
    fn test_unknown_state_yields_empty_townships() {
        let res = handle(&hierarchy(), Some("Unknown"), Some(""), None);
        assert_eq!(to_json(&res), json!({ "township": [] }));
    }

    #[test]
    fn test_absent_parameters_match_empty_parameters() {
        let h = hierarchy();
        assert_eq!(handle(&h, None, None, None), handle(&h, Some(""), Some(""), None));
        assert_eq!(
            handle(&h, Some("Yangon"), None, None),
            handle(&h, Some("Yangon"), Some(""), None)
        );
        // a township without a state still lists states
        assert_eq!(handle(&h, None, Some("Dagon"), None), handle(&h, None, None, None));
    }

    #[test]
    fn test_only_empty_state_lists_states() {
        assert!(lists_states(None));
        assert!(lists_states(Some("")));
        assert!(!lists_states(Some("Yangon")));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let h = hierarchy();
        let first = handle(&h, Some("Yangon"), Some("Dagon"), None);
        let second = handle(&h, Some("Yangon"), Some("Dagon"), None);
        assert_eq!(first, second);
        assert_eq!(h.localities("Yangon", "Dagon"), ["A", "B"]);
    }
}
