//! vulncheck-harness - Exercise harness for the VulnCheck API
//!
//! Each component issues one fixed request against the VulnCheck
//! vulnerability intelligence API and prints the result. A small dispatcher
//! maps normalized names to components.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use config::Config;
pub use logging::init_tracing;
