//! Runnable components, one fixed API request each

pub mod backup;
pub mod browse;
pub mod cpe;
pub mod index;
pub mod pdns;
pub mod purl;
pub mod rule;
pub mod tag;

use crate::application::errors::ApplicationError;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// What a component hands back for printing
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentOutput {
    /// Printed as indented JSON
    Json(Value),
    /// Printed verbatim
    Text(String),
}

impl ComponentOutput {
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            ComponentOutput::Json(value) => serde_json::to_string_pretty(value),
            ComponentOutput::Text(text) => Ok(text.trim_end_matches('\n').to_string()),
        }
    }
}

#[async_trait]
pub trait Component: Send + Sync {
    /// Normalized dispatcher name, e.g. `index-cve-filter`
    fn name(&self) -> &'static str;

    /// One-line description shown by `list` and before running
    fn description(&self) -> &'static str;

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError>;
}

/// Every component the harness ships with
pub fn builtin_components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(backup::IndexBackup),
        Arc::new(browse::BrowseIndexes),
        Arc::new(browse::BrowseBackups),
        Arc::new(cpe::CpeLookup),
        Arc::new(purl::PurlLookup),
        Arc::new(index::InitialAccess),
        Arc::new(index::Vulnrichment),
        Arc::new(index::CveFilter),
        Arc::new(index::BotnetFilter),
        Arc::new(index::IpIntel),
        Arc::new(index::Canaries),
        Arc::new(rule::InitialAccessRules),
        Arc::new(tag::C2Tags),
        Arc::new(pdns::C2Pdns),
    ]
}
