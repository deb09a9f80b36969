use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

const SAMPLE_PURL: &str = "pkg:hex/coherence@0.1.2";

/// `purl`: vulnerabilities for a sample package URL
pub struct PurlLookup;

#[async_trait]
impl Component for PurlLookup {
    fn name(&self) -> &'static str {
        "purl"
    }

    fn description(&self) -> &'static str {
        "Get PURL"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        let response = api.lookup_purl(SAMPLE_PURL).await?;
        Ok(ComponentOutput::Json(response.data))
    }
}
