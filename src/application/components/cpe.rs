use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

const SAMPLE_CPE: &str = "cpe:/a:microsoft:internet_explorer:8.0.6001:beta";

/// `cpe`: CVEs affecting a sample CPE string
pub struct CpeLookup;

#[async_trait]
impl Component for CpeLookup {
    fn name(&self) -> &'static str {
        "cpe"
    }

    fn description(&self) -> &'static str {
        "Get CPE"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        let response = api.lookup_cpe(SAMPLE_CPE).await?;
        Ok(ComponentOutput::Json(response.data))
    }
}
