//! # rfold
//!
//! Unified API for ranking restricted RNA folding experiments.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod ranking_parsers;

pub mod sequence {
    pub use ::rf_sequence::*;
}

pub mod candidate {
    pub use ::rf_candidate::*;
}

