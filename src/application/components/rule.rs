use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::domain::PathSegment;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

/// `rule`: Suricata rules for initial-access exploits, printed as returned
pub struct InitialAccessRules;

#[async_trait]
impl Component for InitialAccessRules {
    fn name(&self) -> &'static str {
        "rule"
    }

    fn description(&self) -> &'static str {
        "Get Rule"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        let rule_type = PathSegment::new("rule_type", "suricata")?;
        let rules = api.get_initial_access_rules(&rule_type).await?;
        Ok(ComponentOutput::Text(rules))
    }
}
