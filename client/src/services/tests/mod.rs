//! Service tests for the client
//!
//! Unit tests for the storage backends; the API client is exercised
//! end-to-end in the crate's integration tests against a mock server.
