//! Client library for the liquor recommendation product
//!
//! Provides the session-backed profile store, the page router, and the
//! typed REST client used to talk to the recommendation backend.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export main types
pub use crate::core::{PROFILE_SLOT, Page, ProfileStore, ROUTES, Route, Router};
pub use error::{ClientError, ClientResult};

// Re-export trait definitions
pub use traits::SessionStorage;

// Re-export service implementations
pub use services::{ApiClient, FileSessionStorage, MemorySessionStorage, NullSessionStorage};
