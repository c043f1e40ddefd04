use crate::domain::model::{Project, Selections};

/// A project passes when every dimension with a non-empty selection contains
/// its value: OR within a dimension, AND across dimensions. An empty
/// selection set on a dimension filters nothing out.
pub fn matches(project: &Project, selections: &Selections) -> bool {
    let category_ok =
        selections.categories.is_empty() || selections.categories.contains(&project.category);
    let location_ok =
        selections.locations.is_empty() || selections.locations.contains(&project.location);
    category_ok && location_ok
}

/// Recompute the displayed subset from the full list and current selections.
/// Always a fresh pass over the whole list; nothing is cached.
pub fn apply(projects: &[Project], selections: &Selections) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| matches(p, selections))
        .cloned()
        .collect()
}
