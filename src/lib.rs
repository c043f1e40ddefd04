pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpProjectSource;
pub use config::CliConfig;
pub use core::view_model::ViewModel;
pub use domain::model::{Dimension, Facets, Project, Selections, ViewSnapshot};
pub use utils::error::{ExplorerError, Result};
