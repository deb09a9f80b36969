//! Browsing the catalogue of indexes and backups

use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

/// `browse-indexes`
pub struct BrowseIndexes;

/// `browse-backups`
pub struct BrowseBackups;

#[async_trait]
impl Component for BrowseIndexes {
    fn name(&self) -> &'static str {
        "browse-indexes"
    }

    fn description(&self) -> &'static str {
        "Browse Indexes"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        Ok(ComponentOutput::Json(api.list_indexes().await?.data))
    }
}

#[async_trait]
impl Component for BrowseBackups {
    fn name(&self) -> &'static str {
        "browse-backups"
    }

    fn description(&self) -> &'static str {
        "Browse Backups"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        Ok(ComponentOutput::Json(api.list_backups().await?.data))
    }
}
