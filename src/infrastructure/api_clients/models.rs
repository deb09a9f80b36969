//! Response envelope shared by the JSON endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"_benchmark": ..., "_meta": {...}, "data": ...}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "_benchmark", default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<f64>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    #[serde(default)]
    pub data: Value,
}

/// Paging and provenance details attached to index responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_documents: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_item: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_item: Option<u64>,
    /// Anything else the API reports, e.g. echoed filter parameters
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
