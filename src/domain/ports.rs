use crate::domain::model::Project;
use crate::utils::error::Result;

/// Where project records come from. The one production implementation is the
/// HTTP adapter; tests substitute in-memory sources.
pub trait ProjectSource: Send + Sync {
    fn fetch_projects(&self) -> impl std::future::Future<Output = Result<Vec<Project>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}
