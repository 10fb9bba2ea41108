
/// Characters treated as alignment gaps by [ungapped].
pub const GAP_CHARS: [char; 4] = ['-', '_', '~', '.'];

/// Convert a (possibly DNA) sequence to the RNA alphabet.
///
/// Substitutes `T` with `U` and `t` with `u`, everything else (including
/// case) is kept.
///
/// ```rust
/// assert_eq!(rf_sequence::to_rna("ACGTacgt"), "ACGUacgu");
/// ```
pub fn to_rna(sequence: &str) -> String {
    sequence.chars().map(|c| match c {
        'T' => 'U',
        't' => 'u',
        _ => c,
    }).collect()
}

/// Convert a sequence to uppercase.
pub fn to_upper(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

/// A copy of the sequence with all gap characters removed.
pub fn ungapped(sequence: &str) -> String {
    sequence.chars().filter(|c| !GAP_CHARS.contains(c)).collect()
}
