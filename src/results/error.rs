// Result Processing Errors

use thiserror::Error;

use crate::common::path::NavigablePath;

/// Errors raised while processing a query's tabular results.
#[derive(Error, Debug)]
pub enum ResultsError {
    /// Failure reading or decoding the underlying values source.
    #[error("values source error: {0}")]
    Source(String),

    /// Two initializers were registered under the same path.
    #[error("duplicate initializer registered for path {0}")]
    DuplicateInitializerPath(NavigablePath),

    /// An initializer or assembler could not do its work.
    #[error("initialization error at {path}: {message}")]
    Initialization {
        path: NavigablePath,
        message: String,
    },

    /// Failure combining assembled values into a result row.
    #[error("row reading error: {0}")]
    RowRead(String),

    /// A capability deliberately unsupported by this layer.
    #[error("not yet implemented: {0}")]
    NotYetImplemented(&'static str),
}

/// Result type for result-processing operations.
pub type ResultsResult<T> = Result<T, ResultsError>;
