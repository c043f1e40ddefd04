use crate::core::{facets, filter};
use crate::domain::model::{Dimension, Facets, Project, Selections, ViewSnapshot};
use crate::domain::ports::ProjectSource;
use crate::utils::error::Result;

/// Owns the loaded project list, the derived facets, and the user's
/// selections. All state starts empty; `load` and `toggle` are the only
/// mutation entry points, and each returns the post-mutation snapshot for
/// the rendering layer to consume.
#[derive(Debug, Default)]
pub struct ViewModel {
    projects: Vec<Project>,
    facets: Facets,
    selections: Selections,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the project list through `source`, exactly once per call site.
    ///
    /// On success the list is stored and the facets are derived from it. On
    /// failure the error is logged and returned, the state stays empty, and
    /// no retry is attempted; the rendered view is then indistinguishable
    /// from "no data exists".
    pub async fn load<S: ProjectSource>(&mut self, source: &S) -> Result<ViewSnapshot> {
        tracing::debug!("Loading project list");
        match source.fetch_projects().await {
            Ok(projects) => {
                self.facets = facets::derive_facets(&projects);
                tracing::info!(
                    "Loaded {} projects ({} categories, {} locations)",
                    projects.len(),
                    self.facets.categories.len(),
                    self.facets.locations.len()
                );
                self.projects = projects;
                Ok(self.snapshot())
            }
            Err(e) => {
                tracing::error!("Project load failed: {}", e);
                self.projects.clear();
                self.facets = Facets::default();
                Err(e)
            }
        }
    }

    /// Check or uncheck one facet value and return the resulting snapshot.
    pub fn toggle(&mut self, dimension: Dimension, value: &str) -> ViewSnapshot {
        self.selections.toggle(dimension, value);
        self.snapshot()
    }

    /// Recompute the filtered view from the full list and current selections.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            facets: self.facets.clone(),
            selections: self.selections.clone(),
            projects: filter::apply(&self.projects, &self.selections),
        }
    }
}
