//! Candidates of restricted folding experiments and how to rank them.

pub mod candidate_io;

/// The CandidateRecord value type.
mod candidate;

/// Ranking rules and selection helpers.
mod ranking;

pub use candidate::*;
pub use ranking::*;
pub use candidate_io::CandidateError;

