//! Index queries, with and without filters
//!
//! Every component here hits `GET /index/{index}`; they differ only in the
//! index name and the fixed filters.

use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::domain::{IndexQuery, PathSegment};
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

async fn query(
    api: &dyn VulnCheckApi,
    index: &str,
    filters: IndexQuery,
) -> Result<ComponentOutput, ApplicationError> {
    let index = PathSegment::new("index", index)?;
    let response = api.query_index(&index, &filters).await?;
    Ok(ComponentOutput::Json(response.data))
}

/// `index-initial-access`: the exploits index
pub struct InitialAccess;

/// `index-vulnrichment`
pub struct Vulnrichment;

/// `index-cve-filter`: initial-access entries for CVE-2023-27350 (PaperCut)
pub struct CveFilter;

/// `index-botnet-filter`
pub struct BotnetFilter;

/// `index-ip-intel`: Swedish C2 hosts from the 3-day IP intel index
pub struct IpIntel;

/// `index-canary`
pub struct Canaries;

#[async_trait]
impl Component for InitialAccess {
    fn name(&self) -> &'static str {
        "index-initial-access"
    }

    fn description(&self) -> &'static str {
        "Get Index Initial Access"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        query(api, "exploits", IndexQuery::new()).await
    }
}

#[async_trait]
impl Component for Vulnrichment {
    fn name(&self) -> &'static str {
        "index-vulnrichment"
    }

    fn description(&self) -> &'static str {
        "Get Index Vulnrichment"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        query(api, "vulnrichment", IndexQuery::new()).await
    }
}

#[async_trait]
impl Component for CveFilter {
    fn name(&self) -> &'static str {
        "index-cve-filter"
    }

    fn description(&self) -> &'static str {
        "Get Index with CVE Filter"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        query(api, "initial-access", IndexQuery::new().cve("CVE-2023-27350")).await
    }
}

#[async_trait]
impl Component for BotnetFilter {
    fn name(&self) -> &'static str {
        "index-botnet-filter"
    }

    fn description(&self) -> &'static str {
        "Get Index with Botnet Filter"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        query(api, "botnets", IndexQuery::new().botnet("Fbot")).await
    }
}

#[async_trait]
impl Component for IpIntel {
    fn name(&self) -> &'static str {
        "index-ip-intel"
    }

    fn description(&self) -> &'static str {
        "Get Index IP Intel"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        query(api, "ipintel-3d", IndexQuery::new().country("Sweden").id("c2")).await
    }
}

#[async_trait]
impl Component for Canaries {
    fn name(&self) -> &'static str {
        "index-canary"
    }

    fn description(&self) -> &'static str {
        "Get Index Canaries"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        query(api, "canaries", IndexQuery::new()).await
    }
}
