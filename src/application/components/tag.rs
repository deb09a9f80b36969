use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

/// `tag`: VulnCheck C2 tag list
pub struct C2Tags;

#[async_trait]
impl Component for C2Tags {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn description(&self) -> &'static str {
        "Get Tag"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        Ok(ComponentOutput::Text(api.get_c2_tags().await?))
    }
}
