//! # Error Module - Custom *dframe* Error Type
//!
//! Defines the unified error type for dframe.
//!
//! ## Features
//! - Covers dtype conflicts, malformed addresses, out-of-range positions,
//! shape and length mismatches, duplicate names, and failed casts.
//! - Derives `Display` and `Error` through `thiserror`, so errors compose
//! with `?` and any `Box<dyn Error>` based caller.

use thiserror::Error;

use crate::enums::dtype::DType;

/// Crate-wide result alias.
pub type DFResult<T> = Result<T, DFrameError>;

/// Catch all error type for `dframe`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DFrameError {
    /// Values handed to an array carry more than one non-missing dtype.
    #[error("Dtype conflict: values mix '{first}' and '{second}'.")]
    DtypeConflict { first: DType, second: DType },

    /// An assigned element does not match the array's dtype.
    #[error("Dtype mismatch: expected '{expected}', found '{found}'.")]
    DtypeMismatch { expected: DType, found: DType },

    #[error("Invalid address type: {0}")]
    InvalidAddressType(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Index {index} is out of range for length {len}.")]
    IndexOutOfRange { index: isize, len: usize },

    /// Boolean scalar, mask of the wrong length, or mask with missing entries.
    #[error("Ambiguous logical index: {0}")]
    AmbiguousLogicalIndex(String),

    #[error("Mixed address types: a list may hold positions, names or booleans, not a mix.")]
    MixedAddressTypes,

    #[error("Column '{0}' is selected more than once.")]
    DuplicateColumnSelection(String),

    #[error("Column '{0}' appears in more than one frame.")]
    DuplicateColumnAcrossFrames(String),

    #[error("Column name '{0}' is not unique.")]
    DuplicateColumnName(String),

    #[error("Column '{0}' not found.")]
    ColumnNotFound(String),

    #[error("Row count mismatch: expected {expected}, found {found}.")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("Ragged rows: row {row} has {found} values, expected {expected}.")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[error("Length mismatch: expected {expected}, found {found}.")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Name count mismatch: expected {expected} names, found {found}.")]
    NameCountMismatch { expected: usize, found: usize },

    #[error("Ambiguous deletion: one side of a two-dimensional delete must be the full slice ':'.")]
    AmbiguousDeletion,

    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),

    #[error("Invalid operation '{op}': {message}")]
    InvalidOperation { op: &'static str, message: String },

    #[error("Incompatible frames: {0}")]
    IncompatibleFrames(String),

    #[error("Type error: cannot convert from '{from}' to '{to}'{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_else(|| ".".to_string()))]
    TypeError {
        from: &'static str,
        to: &'static str,
        message: Option<String>,
    },

    /// A structural invariant was broken. Always a bug in this crate.
    #[error("Internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}

impl DFrameError {
    pub(crate) fn invalid_op(op: &'static str, message: impl Into<String>) -> Self {
        DFrameError::InvalidOperation {
            op,
            message: message.into(),
        }
    }
}
