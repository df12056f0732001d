//! Typed errors for the evaluation engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Malformed *data* never errors - missing or garbled field values flow
//! through the normal comparison branches as empty strings. The only loud
//! failures are configuration mistakes in the field registry.

use thiserror::Error;

/// Errors that can occur while configuring an evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A field declaration names a comparator kind the engine does not have.
    #[error("unknown comparator kind: {0}")]
    UnknownComparator(String),

    /// The same field name was declared twice in one registry.
    #[error("duplicate field declaration: {0}")]
    DuplicateField(String),
}

/// Result type alias for evaluation configuration.
pub type Result<T> = std::result::Result<T, EvalError>;
