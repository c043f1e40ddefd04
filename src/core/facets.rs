use crate::domain::model::{Facets, Project};
use std::collections::HashSet;

/// Derive the category and location facet lists from a loaded project list.
///
/// Values are kept in order of first occurrence and compared by exact
/// equality (case-sensitive, no normalization). Pure and deterministic.
pub fn derive_facets(projects: &[Project]) -> Facets {
    Facets {
        categories: distinct_in_order(projects.iter().map(|p| p.category.as_str())),
        locations: distinct_in_order(projects.iter().map(|p| p.location.as_str())),
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str, location: &str) -> Project {
        Project {
            id: id.to_string(),
            project_title: format!("Project {}", id),
            sub_category: "General".to_string(),
            category: category.to_string(),
            location: location.to_string(),
            project_duration: 30,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let projects = vec![
            project("1", "Construction", "Berlin"),
            project("2", "IT", "Munich"),
            project("3", "Construction", "Berlin"),
        ];

        assert_eq!(derive_facets(&projects), derive_facets(&projects));
    }

    #[test]
    fn duplicates_contribute_one_entry() {
        let projects = vec![
            project("1", "Construction", "Berlin"),
            project("2", "Construction", "Munich"),
            project("3", "Construction", "Berlin"),
        ];

        let facets = derive_facets(&projects);
        assert_eq!(facets.categories, vec!["Construction"]);
        assert_eq!(facets.locations, vec!["Berlin", "Munich"]);
    }

    #[test]
    fn first_occurrence_order_is_kept() {
        let projects = vec![
            project("1", "Logistics", "Hamburg"),
            project("2", "Construction", "Berlin"),
            project("3", "Logistics", "Munich"),
            project("4", "IT", "Berlin"),
        ];

        let facets = derive_facets(&projects);
        assert_eq!(facets.categories, vec!["Logistics", "Construction", "IT"]);
        assert_eq!(facets.locations, vec!["Hamburg", "Berlin", "Munich"]);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let projects = vec![
            project("1", "construction", "Berlin"),
            project("2", "Construction", "berlin"),
        ];

        let facets = derive_facets(&projects);
        assert_eq!(facets.categories, vec!["construction", "Construction"]);
        assert_eq!(facets.locations, vec!["Berlin", "berlin"]);
    }

    #[test]
    fn empty_list_yields_empty_facets() {
        let facets = derive_facets(&[]);
        assert!(facets.categories.is_empty());
        assert!(facets.locations.is_empty());
    }
}
