use crate::domain::model::ViewSnapshot;
use std::collections::HashSet;

const EMPTY_STATE_MESSAGE: &str = "No projects found for the selected filters.";

/// Format a snapshot as the rendered surface: two checkbox groups followed
/// by the filtered card list, or the explicit empty-state message when
/// nothing passes the filter.
pub fn render(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();

    out.push_str("Filter\n");
    render_facet_group(
        &mut out,
        "Categories",
        &snapshot.facets.categories,
        &snapshot.selections.categories,
    );
    render_facet_group(
        &mut out,
        "Locations",
        &snapshot.facets.locations,
        &snapshot.selections.locations,
    );

    out.push_str("\nProject List\n");
    if snapshot.is_empty() {
        out.push_str(EMPTY_STATE_MESSAGE);
        out.push('\n');
        return out;
    }

    for project in &snapshot.projects {
        out.push_str(&format!("- {}\n", project.project_title));
        out.push_str(&format!("    {}\n", project.sub_category));
        out.push_str(&format!("    Category: {}\n", project.category));
        out.push_str(&format!("    Location: {}\n", project.location));
        out.push_str(&format!("    Duration: {} days\n", project.project_duration));
        out.push_str(&format!("    Job ID: {}\n", project.id));
    }
    out
}

fn render_facet_group(out: &mut String, label: &str, values: &[String], selected: &HashSet<String>) {
    out.push_str(&format!("  {}\n", label));
    for value in values {
        let mark = if selected.contains(value) { "x" } else { " " };
        out.push_str(&format!("    [{}] {}\n", mark, value));
    }
}
