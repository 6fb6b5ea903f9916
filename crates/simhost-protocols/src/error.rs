//! Error types for dispatch lookups.

use thiserror::Error;

/// Errors surfaced by the `require_*` dispatch conveniences.
///
/// Plain lookups report absence as `None`; these variants exist for call
/// sites that want an error naming what was missing.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Nothing registered under name: {0}")]
    NotFound(String),

    #[error("Unrecognized token: {0}")]
    UnrecognizedToken(String),
}
