//! Store client error taxonomy.

use thiserror::Error;

/// Failure modes of a note store round trip.
///
/// The client maps transport and decode failures as they happen but does not
/// retry or classify further; callers treat any variant as "operation
/// failed" and decide what to show the user.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure before a response arrived.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Response body was not valid JSON for the expected shape.
    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Non-success HTTP status. The body text is carried opaquely; no error
    /// schema is defined by the store.
    #[error("store returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// Update/delete precondition: only persisted notes carry an id.
    #[error("note id is empty; only persisted notes can be updated or deleted")]
    EmptyNoteId,
}

impl StoreError {
    /// Status code for `Remote` failures, if that is what this is.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            StoreError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
