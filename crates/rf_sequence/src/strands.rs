use log::warn;
use colored::*;

use crate::CUT_POINT;
use crate::DEFAULT_DELIMITER;
use crate::SequenceError;

/// Split a multi-strand string into its elements.
///
/// Uses `delimiter` or [DEFAULT_DELIMITER] (`&`) if `None`. Consecutive,
/// leading and trailing delimiters do not produce empty elements. If the
/// delimiter is not found, the result contains exactly one element: the
/// input string.
///
/// ```rust
/// use rf_sequence::strsplit;
/// assert_eq!(strsplit("GGGG&CCCC&AAAAA", None), vec!["GGGG", "CCCC", "AAAAA"]);
/// assert_eq!(strsplit("GGGGCCCC", Some('&')), vec!["GGGGCCCC"]);
/// ```
pub fn strsplit(string: &str, delimiter: Option<char>) -> Vec<String> {
    let delimiter = delimiter.unwrap_or(DEFAULT_DELIMITER);
    string.split(delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join elements into one string, separated by `delimiter`.
///
/// Without a delimiter the elements are simply concatenated.
pub fn strjoin<S: AsRef<str>>(strings: &[S], delimiter: Option<char>) -> String {
    let total: usize = strings.iter().map(|s| s.as_ref().len() + 1).sum();
    let mut result = String::with_capacity(total);
    for (i, s) in strings.iter().enumerate() {
        if i > 0 {
            if let Some(d) = delimiter {
                result.push(d);
            }
        }
        result.push_str(s.as_ref());
    }
    result
}

/// Insert a [CUT_POINT] character into a string.
///
/// The cut point `cp` is 1-based, i.e. it denotes the first position of
/// the second strand. If `cp <= 0`, this returns a plain copy. A cut point
/// beyond the end of the string appends the marker.
///
/// ```rust
/// use rf_sequence::cut_point_insert;
/// assert_eq!(cut_point_insert("GGGGCCCC", 5), "GGGG&CCCC");
/// assert_eq!(cut_point_insert("GGGGCCCC", 0), "GGGGCCCC");
/// ```
pub fn cut_point_insert(string: &str, cp: isize) -> String {
    if cp <= 0 {
        return string.to_string();
    }
    let offset = string.char_indices()
        .nth(cp as usize - 1)
        .map(|(b, _)| b)
        .unwrap_or(string.len());

    let mut result = String::with_capacity(string.len() + 1);
    result.push_str(&string[..offset]);
    result.push(CUT_POINT);
    result.push_str(&string[offset..]);
    result
}

/// Remove the [CUT_POINT] character from a string.
///
/// Only the first whitespace-separated token of the input is considered.
/// Returns the string with the marker sliced out, together with the
/// 1-based cut point (the inverse of [cut_point_insert]). A marker at the
/// very end does not separate anything and is reported as `None`.
///
/// ```rust
/// use rf_sequence::cut_point_remove;
/// let (seq, cp) = cut_point_remove("GGGG&CCCC").unwrap();
/// assert_eq!(seq, "GGGGCCCC");
/// assert_eq!(cp, Some(5));
/// ```
pub fn cut_point_remove(string: &str) -> Result<(String, Option<usize>), SequenceError> {
    let token = string.split_whitespace().next().unwrap_or("");

    let Some(pos) = token.find(CUT_POINT) else {
        return Ok((token.to_string(), None));
    };

    let head = &token[..pos];
    let tail = &token[pos + CUT_POINT.len_utf8()..];
    let cp = head.chars().count() + 1;

    if let Some(next) = tail.find(CUT_POINT) {
        return Err(SequenceError::MultipleCutPoints(cp + tail[..next].chars().count() + 1));
    }

    let cp = if tail.is_empty() {
        warn!("{} trailing cut-point in '{}' ignored", "WARNING:".red(), token);
        None
    } else {
        Some(cp)
    };

    Ok((format!("{}{}", head, tail), cp))
}
