pub mod facets;
pub mod filter;
pub mod view_model;

pub use crate::domain::model::{Dimension, Facets, Project, Selections, ViewSnapshot};
pub use crate::domain::ports::{ConfigProvider, ProjectSource};
pub use crate::utils::error::Result;
