//! API client for the VulnCheck vulnerability intelligence service

pub mod models;
pub mod traits;
pub mod vulncheck;

pub use models::*;
pub use traits::*;
pub use vulncheck::*;
