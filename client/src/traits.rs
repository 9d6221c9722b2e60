//! Service trait definitions for dependency injection
//!
//! Durable storage is abstracted behind a trait so hosts without a
//! session store can inject a no-op implementation instead of branching
//! on the environment at runtime.

use async_trait::async_trait;

use crate::error::ClientResult;

/// Durable per-session key-value storage capability
#[mockall::automock]
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`; absent slot yields `None`
    async fn read(&self, key: &str) -> ClientResult<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value
    async fn write(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Remove the slot for `key`; removing an absent slot is a no-op
    async fn remove(&self, key: &str) -> ClientResult<()>;
}
