//! Application Layer - Components and the services that run them
//!
//! Each component performs one fixed VulnCheck request; the registry maps
//! normalized names to components and the runner executes and renders them.

pub mod components;
pub mod errors;
pub mod services;

pub use components::{Component, ComponentOutput};
pub use errors::*;
pub use services::*;
