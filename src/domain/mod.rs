//! Domain Layer - Core concepts shared by the harness
//!
//! Value objects for the names the dispatcher and the API client deal in,
//! plus the errors raised when those names are malformed.

pub mod errors;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
