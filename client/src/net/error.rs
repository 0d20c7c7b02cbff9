//! Failure taxonomy for API calls.

/// Why a live API call produced no usable data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (DNS, CORS, offline).
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not JSON, or list items did not match the record shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The envelope had no list at the expected key path.
    #[error("response missing list at `{0}`")]
    Shape(String),

    /// The list was present but empty.
    #[error("response list was empty")]
    Empty,

    /// Called outside the browser (server render or native tests).
    #[error("not available during server render")]
    Unavailable,
}
