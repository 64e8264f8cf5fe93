//! # Word Ladder
//!
//! A word ladder solver computing the minimum number of single-letter
//! substitutions transforming a source word into a target word, where every
//! intermediate word must appear in a fixed-length dictionary.
//!
//! The solver tries a cheap greedy direct-edit pass first and falls back to a
//! complete bidirectional breadth-first search over the implicit graph of
//! same-length dictionary words connected by single-letter edits.

pub mod dictionary;
pub mod error;
pub mod search;

pub use dictionary::Dictionary;
pub use error::LadderError;
pub use search::{LadderResult, LadderSolver};

/// Default alphabet traversal order for the bidirectional search, most
/// frequent English letters first. Affects which equally-short path is
/// discovered first, never the returned distance.
pub const FREQUENCY_ALPHABET: &[u8; 26] = b"etaoinsrhdlucmfywgpbvkxqjz";
