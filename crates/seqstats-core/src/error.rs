//! Error types for seqstats.
//!
//! Every failure the engines can report is a variant of [`Error`]. Callers
//! that only care about the broad category can use [`Error::kind`].

use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was malformed (e.g. a range whose maximum is below its minimum).
    InvalidArgument,
    /// The input was well-formed but cannot support the requested operation
    /// (empty sequence, too few elements, zero bins).
    InvalidState,
    /// An engine invariant was broken. Seeing this indicates a defect.
    Internal,
}

/// The main error type for seqstats operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input sequence is empty.
    #[error("empty input: source sequence contains no elements")]
    EmptyInput,

    /// The input sequence is shorter than the statistic requires.
    #[error("insufficient data for {statistic}: required at least {required} elements, got {actual}")]
    InsufficientData {
        /// Name of the statistic that was requested.
        statistic: &'static str,
        /// Minimum number of elements the statistic needs.
        required: usize,
        /// Number of elements provided.
        actual: usize,
    },

    /// The requested number of bins cannot be used.
    #[error("invalid bin count {bin_count}: {reason}")]
    InvalidBinCount {
        /// The bin count that was provided.
        bin_count: usize,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Range bounds are unordered or not numbers.
    #[error("invalid range: min {min} must not exceed max {max} and neither may be NaN")]
    InvalidRange {
        /// Lower bound that was provided.
        min: f64,
        /// Upper bound that was provided.
        max: f64,
    },

    /// Converting a value between numeric representations failed.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// An arithmetic result does not fit the caller's representation.
    #[error("arithmetic overflow: {context}")]
    Overflow {
        /// Description of the overflowing operation.
        context: &'static str,
    },

    /// A value matched none of the constructed bins.
    #[error("value {value} does not fall into any bin")]
    UnassignedValue {
        /// The value that could not be placed.
        value: f64,
    },
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } | Self::NumericConversion { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::EmptyInput
            | Self::InsufficientData { .. }
            | Self::InvalidBinCount { .. }
            | Self::Overflow { .. } => ErrorKind::InvalidState,
            Self::UnassignedValue { .. } => ErrorKind::Internal,
        }
    }
}

/// Convenience type alias for Results using the seqstats Error type.
pub type Result<T> = std::result::Result<T, Error>;
