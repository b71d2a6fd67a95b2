use crate::api::error::FetchError;
use crate::types::error::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TempCheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
