use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str = "https://demo.myproject.ai/api/v1/projects";

#[derive(Debug, Clone, Parser)]
#[command(name = "project-explorer")]
#[command(about = "Fetch, facet, and filter project listings from a remote API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Toggle a category filter (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Toggle a location filter (repeatable).
    #[arg(long = "location")]
    pub locations: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        for category in &self.categories {
            validate_non_empty_string("category", category)?;
        }
        for location in &self.locations {
            validate_non_empty_string("location", location)?;
        }
        Ok(())
    }
}
