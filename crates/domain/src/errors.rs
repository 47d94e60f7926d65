use std::time::Duration;
use thiserror::Error;

/// Resolution failures surfaced to the host.
///
/// Per-entry problems (undecodable payloads, wrong record type) never show up
/// here; the resolver skips those entries and keeps going.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Query type {0} is not supported")]
    UnsupportedType(u16),

    #[error("No records stored under key {0}")]
    NotFound(String),

    #[error("Record store error: {0}")]
    Backend(#[source] StoreError),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Backend(err)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid store response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Failed to decode record envelope: {0}")]
    Decode(String),
}
