//! Service implementations
//!
//! I/O-facing implementations behind the client's trait seams

pub mod api_client;
pub mod session_storage;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use api_client::ApiClient;
pub use session_storage::{FileSessionStorage, MemorySessionStorage, NullSessionStorage};
