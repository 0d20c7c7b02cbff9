//! Fatal server errors.
//!
//! Everything here ends the process; `main` logs it and exits non-zero.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{var}: invalid value {value:?} ({reason})")]
    Config { var: &'static str, value: String, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}
