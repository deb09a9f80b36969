//! VulnCheck API client implementation

use super::models::ApiResponse;
use super::traits::VulnCheckApi;
use crate::application::errors::{ApiError, ApplicationError};
use crate::config::ApiConfig;
use crate::domain::{IndexQuery, PathSegment};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

/// Client for the VulnCheck v3 REST API using bearer-token auth
pub struct VulnCheckClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl VulnCheckClient {
    /// Create a client from the API section of the configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        let token = config.bearer_token().map(str::to_string);

        tracing::debug!(
            base_url = %config.base_url(),
            has_token = token.is_some(),
            "Initialized VulnCheckClient"
        );

        Ok(Self {
            client,
            base_url: config.base_url(),
            token,
        })
    }

    /// Create a client against an explicit base URL, e.g. a local mock server
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, ApplicationError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an authenticated GET and reject non-success statuses
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response, ApplicationError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(%url, params = query.len(), "Sending VulnCheck request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), path, "VulnCheck request failed");
            return Err(ApiError::from_status(status.as_u16(), path, &body).into());
        }

        Ok(response)
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, ApplicationError> {
        let response: ApiResponse = self.get(path, query).await?.json().await?;

        if let Some(meta) = &response.meta {
            tracing::debug!(
                path,
                index = ?meta.index,
                total_documents = ?meta.total_documents,
                page = ?meta.page,
                total_pages = ?meta.total_pages,
                "Received VulnCheck response"
            );
        }

        Ok(response)
    }

    async fn get_text(&self, path: &str) -> Result<String, ApplicationError> {
        Ok(self.get(path, &[]).await?.text().await?)
    }
}

#[async_trait]
impl VulnCheckApi for VulnCheckClient {
    async fn list_indexes(&self) -> Result<ApiResponse, ApplicationError> {
        self.get_json("/index", &[]).await
    }

    async fn list_backups(&self) -> Result<ApiResponse, ApplicationError> {
        self.get_json("/backup", &[]).await
    }

    async fn get_index_backup(
        &self,
        index: &PathSegment,
    ) -> Result<ApiResponse, ApplicationError> {
        self.get_json(&format!("/backup/{}", index), &[]).await
    }

    async fn query_index(
        &self,
        index: &PathSegment,
        query: &IndexQuery,
    ) -> Result<ApiResponse, ApplicationError> {
        let params: Vec<(&str, String)> = query
            .params()
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect();

        self.get_json(&format!("/index/{}", index), &params).await
    }

    async fn lookup_cpe(&self, cpe: &str) -> Result<ApiResponse, ApplicationError> {
        self.get_json("/cpe", &[("cpe", cpe.to_string())]).await
    }

    async fn lookup_purl(&self, purl: &str) -> Result<ApiResponse, ApplicationError> {
        self.get_json("/purl", &[("purl", purl.to_string())]).await
    }

    async fn get_initial_access_rules(
        &self,
        rule_type: &PathSegment,
    ) -> Result<String, ApplicationError> {
        self.get_text(&format!("/rules/initial-access/{}", rule_type))
            .await
    }

    async fn get_c2_tags(&self) -> Result<String, ApplicationError> {
        self.get_text("/tags/vulncheck-c2").await
    }

    async fn get_c2_pdns(&self) -> Result<String, ApplicationError> {
        self.get_text("/pdns/vulncheck-c2").await
    }
}
