//! Trait for the VulnCheck API client

use super::models::ApiResponse;
use crate::application::errors::ApplicationError;
use crate::domain::{IndexQuery, PathSegment};
use async_trait::async_trait;

/// One method per endpoint family the harness exercises
#[async_trait]
pub trait VulnCheckApi: Send + Sync {
    /// `GET /index`
    async fn list_indexes(&self) -> Result<ApiResponse, ApplicationError>;

    /// `GET /backup`
    async fn list_backups(&self) -> Result<ApiResponse, ApplicationError>;

    /// `GET /backup/{index}`
    async fn get_index_backup(
        &self,
        index: &PathSegment,
    ) -> Result<ApiResponse, ApplicationError>;

    /// `GET /index/{index}` with optional filters
    async fn query_index(
        &self,
        index: &PathSegment,
        query: &IndexQuery,
    ) -> Result<ApiResponse, ApplicationError>;

    /// `GET /cpe?cpe=...`
    async fn lookup_cpe(&self, cpe: &str) -> Result<ApiResponse, ApplicationError>;

    /// `GET /purl?purl=...`
    async fn lookup_purl(&self, purl: &str) -> Result<ApiResponse, ApplicationError>;

    /// `GET /rules/initial-access/{rule_type}`, returned as text
    async fn get_initial_access_rules(
        &self,
        rule_type: &PathSegment,
    ) -> Result<String, ApplicationError>;

    /// `GET /tags/vulncheck-c2`, returned as text
    async fn get_c2_tags(&self) -> Result<String, ApplicationError>;

    /// `GET /pdns/vulncheck-c2`, returned as text
    async fn get_c2_pdns(&self) -> Result<String, ApplicationError>;
}
