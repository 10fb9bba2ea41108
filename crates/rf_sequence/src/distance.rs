use log::debug;

/// Number of mismatching positions between two sequences.
///
/// Positions are compared up to the length of the shorter sequence.
pub fn hamming_distance(s1: &str, s2: &str) -> usize {
    s1.chars().zip(s2.chars())
        .filter(|(a, b)| a != b)
        .count()
}

/// Like [hamming_distance], but only the first `n` positions (from the 5'
/// end) are taken into account.
///
/// Both sequences are expected to have at least `n` characters. If one of
/// them is shorter, the comparison stops at its end.
///
/// ```rust
/// use rf_sequence::hamming_distance_bound;
/// assert_eq!(hamming_distance_bound("GGGGAAAA", "GGGGCCCC", 4), 0);
/// assert_eq!(hamming_distance_bound("GGGGAAAA", "GGGGCCCC", 6), 2);
/// ```
pub fn hamming_distance_bound(s1: &str, s2: &str, n: usize) -> usize {
    let shorter = s1.chars().count().min(s2.chars().count());
    if n > shorter {
        debug!("Hamming bound {} exceeds sequence length {}, comparing {} positions.",
            n, shorter, shorter);
    }
    s1.chars().zip(s2.chars())
        .take(n)
        .filter(|(a, b)| a != b)
        .count()
}
