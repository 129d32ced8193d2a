//! Framework error type.
//!
//! Sub-crates define their own error enums (`CatalogError`, `SimError`,
//! `OutputError`) and either convert into `EpiError` via `From` impls or keep
//! them separate.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `epi-core`.
pub type EpiResult<T> = Result<T, EpiError>;
