use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

/// `pdns`: protective DNS list of VulnCheck C2 hostnames
pub struct C2Pdns;

#[async_trait]
impl Component for C2Pdns {
    fn name(&self) -> &'static str {
        "pdns"
    }

    fn description(&self) -> &'static str {
        "Get PDNS"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        Ok(ComponentOutput::Text(api.get_c2_pdns().await?))
    }
}
