//! Error types

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while reading or minimizing a function
#[derive(Error, Debug)]
pub enum Error {
    /// Number of variables outside of the supported range
    #[error("Number of variables must be between 1 and 15 (included), got {0}")]
    InvalidVariableCount(usize),

    /// Minterm that does not fit in the number of variables
    #[error("Minterm {minterm} does not fit in {nb_variables} variables")]
    MintermOutOfRange {
        /// The offending minterm
        minterm: u32,
        /// Number of variables of the function
        nb_variables: usize,
    },

    /// Display table shorter than the number of variables
    #[error("Expected at least {expected} variable names, got {got}")]
    NotEnoughNames {
        /// Number of variables of the function
        expected: usize,
        /// Number of names provided
        got: usize,
    },

    /// Token that is not a natural number in a minterm file
    #[error("Invalid minterm '{token}' at line {line}")]
    Parse {
        /// Line of the token, starting at 1
        line: usize,
        /// The offending token
        token: String,
    },

    /// Probability outside of [0, 1] for a random function
    #[error("Ratio must be between 0 and 1 (included), got {0}")]
    InvalidRatio(f64),

    /// Cover that does not implement its function
    #[error("Incorrect cover: missing minterms {missing:?}, spurious minterms {spurious:?}")]
    IncorrectCover {
        /// On-set minterms not covered
        missing: Vec<u32>,
        /// Off-set minterms covered
        spurious: Vec<u32>,
    },

    /// Random functions whose cover did not implement them
    #[error("{failed} incorrect covers out of {total} functions")]
    FailedChecks {
        /// Number of incorrect covers
        failed: usize,
        /// Number of functions checked
        total: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Allocation failure while growing a term list or a chart
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// Result type of the crate
pub type Result<T> = std::result::Result<T, Error>;
