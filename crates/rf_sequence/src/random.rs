use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::SequenceError;

/// A random string of length `len` with characters drawn uniformly from
/// `symbols`.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rf_sequence::random_string;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let seq = random_string(20, &['A', 'C', 'G', 'U'], &mut rng).unwrap();
/// assert_eq!(seq.len(), 20);
/// ```
pub fn random_string<R: Rng + ?Sized>(
    len: usize,
    symbols: &[char],
    rng: &mut R,
) -> Result<String, SequenceError> {
    if symbols.is_empty() {
        return Err(SequenceError::EmptyAlphabet);
    }
    let mut result = String::with_capacity(len);
    for _ in 0..len {
        // Non-empty, checked above.
        if let Some(&c) = symbols.choose(rng) {
            result.push(c);
        }
    }
    Ok(result)
}
