//! Error taxonomy for the solver preconditions and word-list loading.
//!
//! A missing ladder is not represented here: "no such path" is an
//! informational search result, not an error, and the greedy checker's
//! failure only escalates to the complete search.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LadderError {
    /// Source and target differ in length; only substitutions are supported.
    #[error("source and target must be equal length ({source_len} != {target_len})")]
    UnequalLengths { source_len: usize, target_len: usize },

    /// The words do not match the length the dictionary was built for.
    #[error("words must match the dictionary length {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Target membership is a precondition checked before any search runs.
    #[error("target \"{0}\" is not in the dictionary")]
    TargetNotInDictionary(String),

    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
