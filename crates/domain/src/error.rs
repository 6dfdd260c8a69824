//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`JotterError`]
//! via `#[from]`; the HTTP adapter maps the three variants onto distinct
//! status codes.

/// Top-level error for the jotter workspace.
#[derive(Debug, thiserror::Error)]
pub enum JotterError {
    /// The request was malformed (bad id, bad body).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The addressed note does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Client-side input errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A path parameter did not parse as a note id.
    #[error("invalid note id: {0}")]
    InvalidId(String),

    /// The request body failed to deserialize.
    #[error("{0}")]
    Body(String),
}

/// A lookup addressed a row that does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Note"`.
    pub entity: &'static str,
    /// The id that missed.
    pub id: String,
}
