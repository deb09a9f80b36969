//! Index backup download links

use super::{Component, ComponentOutput};
use crate::application::errors::ApplicationError;
use crate::domain::PathSegment;
use crate::infrastructure::VulnCheckApi;
use async_trait::async_trait;

const BACKUP_INDEX: &str = "mitre-cvelist-v5";

/// `backup`: fetch the backup of the MITRE CVE list index
pub struct IndexBackup;

#[async_trait]
impl Component for IndexBackup {
    fn name(&self) -> &'static str {
        "backup"
    }

    fn description(&self) -> &'static str {
        "Get Index Backup"
    }

    async fn execute(&self, api: &dyn VulnCheckApi) -> Result<ComponentOutput, ApplicationError> {
        let index = PathSegment::new("index", BACKUP_INDEX)?;
        let response = api.get_index_backup(&index).await?;
        Ok(ComponentOutput::Json(response.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::components::test_support::RecordingApi;

    #[tokio::test]
    async fn test_requests_cvelist_backup() {
        let api = RecordingApi::default();
        let output = IndexBackup.execute(&api).await.unwrap();

        assert_eq!(api.calls(), vec!["get_index_backup mitre-cvelist-v5"]);
        assert!(matches!(output, ComponentOutput::Json(_)));
    }
}
