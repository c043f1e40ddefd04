use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One project record as returned by the remote API.
///
/// Decoding is strict: a record missing any of these fields fails the whole
/// load with a decode error instead of rendering blank card fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// The API keys this as `_id`.
    #[serde(rename = "_id")]
    pub id: String,
    pub project_title: String,
    pub sub_category: String,
    pub category: String,
    pub location: String,
    /// Duration in days.
    pub project_duration: u32,
}

/// Top-level API payload. The project list lives under `jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsResponse {
    pub jobs: Vec<Project>,
}

/// The two dimensions projects can be filtered along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Category,
    Location,
}

/// Distinct facet values per dimension, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
}

/// Currently checked facet values, one set per dimension.
///
/// An empty set means "no filter on this dimension" (every project passes),
/// not "match nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selections {
    pub categories: HashSet<String>,
    pub locations: HashSet<String>,
}

impl Selections {
    pub fn for_dimension(&self, dimension: Dimension) -> &HashSet<String> {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Location => &self.locations,
        }
    }

    /// Check `value` if unchecked, uncheck it if checked.
    pub fn toggle(&mut self, dimension: Dimension, value: &str) {
        let set = match dimension {
            Dimension::Category => &mut self.categories,
            Dimension::Location => &mut self.locations,
        };
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }
}

/// Immutable render input produced after every state change: the facet
/// lists, the current selections, and the filtered project list. The
/// rendering layer only ever consumes snapshots, never the live state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub facets: Facets,
    pub selections: Selections,
    pub projects: Vec<Project>,
}

impl ViewSnapshot {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selections = Selections::default();

        selections.toggle(Dimension::Category, "Construction");
        assert!(selections.categories.contains("Construction"));

        selections.toggle(Dimension::Category, "Construction");
        assert!(selections.categories.is_empty());
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut selections = Selections::default();
        selections.toggle(Dimension::Location, "Berlin");
        let before = selections.clone();

        selections.toggle(Dimension::Location, "Munich");
        selections.toggle(Dimension::Location, "Munich");

        assert_eq!(selections, before);
    }

    #[test]
    fn dimensions_are_independent() {
        let mut selections = Selections::default();
        selections.toggle(Dimension::Category, "IT");

        assert!(selections.for_dimension(Dimension::Location).is_empty());
        assert_eq!(selections.for_dimension(Dimension::Category).len(), 1);
    }

    #[test]
    fn project_decodes_from_api_shape() {
        let json = serde_json::json!({
            "_id": "p-1",
            "project_title": "Warehouse refit",
            "sub_category": "Interior",
            "category": "Construction",
            "location": "Hamburg",
            "project_duration": 45
        });

        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.id, "p-1");
        assert_eq!(project.project_duration, 45);
    }

    #[test]
    fn project_with_missing_field_fails_decode() {
        let json = serde_json::json!({
            "_id": "p-1",
            "project_title": "Warehouse refit",
            "category": "Construction",
            "location": "Hamburg",
            "project_duration": 45
        });

        assert!(serde_json::from_value::<Project>(json).is_err());
    }
}
