use std::io;

use thiserror::Error;

/// Fatal errors: malformed input or an inconsistent log. These abort a check
/// outright and say nothing about the solver's correctness; solver faults are
/// reported through [`crate::check::Verdict`] instead.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed input: {0}")]
    Format(String),
    #[error("inconsistent log: {0}")]
    LogConsistency(String),
}
