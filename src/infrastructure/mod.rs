//! Infrastructure Layer - External concerns and implementations
//!
//! HTTP access to the VulnCheck API and process environment loading.

pub mod api_clients;
pub mod env_file;

pub use api_clients::traits::VulnCheckApi;
pub use api_clients::{ApiResponse, ResponseMeta, VulnCheckClient};
pub use env_file::{find_env_file, load_env_file};
