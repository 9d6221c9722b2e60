//! Core business logic modules
//!
//! Pure client state with no transport dependencies

pub mod profile;
pub mod router;

// Re-export commonly used types
pub use profile::{PROFILE_SLOT, ProfileStore};
pub use router::{Page, ROUTES, Route, Router};
