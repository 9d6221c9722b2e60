//! Client-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server returned status {status}")]
    Server { status: u16 },

    #[error("Response decode failed: {message}")]
    Decode { message: String },

    #[error("Stored profile is malformed: {message}")]
    StorageParse { message: String },

    #[error("Session storage I/O error: {0}")]
    StorageIo(#[from] std::io::Error),

    #[error("No route matches path: {path}")]
    RouteNotFound { path: String },

    #[error("User profile is incomplete")]
    ProfileIncomplete,

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

pub type ClientResult<T> = Result<T, ClientError>;
