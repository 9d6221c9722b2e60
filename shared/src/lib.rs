//! Shared types for the liquor recommendation client
//!
//! Contains the wire contract with the recommendation backend plus logging
//! setup used by the client binary. Component-internal types (storage
//! traits, routing) live in the client crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
