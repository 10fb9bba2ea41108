/// SequenceError, FormatError.
mod error;

/// Case folding, DNA -> RNA, gap removal.
mod alphabet;

/// Multi-strand helpers: splitting, joining and cut points.
mod strands;

/// Hamming distances.
mod distance;

/// Owned formatted strings (sprintf/strcat replacements).
mod formatting;

/// Random sequences over a symbol set.
mod random;

pub use error::*;
pub use alphabet::*;
pub use strands::*;
pub use distance::*;
pub use formatting::*;
pub use random::*;

/// The strand break marker in multi-strand sequences and structures.
pub const CUT_POINT: char = '&';

/// Delimiter used by [strsplit] when none is given.
pub const DEFAULT_DELIMITER: char = '&';

