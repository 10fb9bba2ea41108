//! Reading and writing collections of candidates.
//!
//! Two formats are supported: a plain table with one candidate per line
//! (see [CandidateRecord::to_line]) and JSON. Table input may also be
//! whitespace-separated, which is handy for hand-written files.

use std::fmt;
use std::error::Error;
use std::io::{BufRead, Write};
use serde::{Serialize, Deserialize};

use crate::CandidateRecord;

#[derive(Debug)]
pub enum CandidateError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingField { line: usize, field: &'static str },
    InvalidEnergy { line: usize, field: &'static str, value: String },
    Unrepresentable { field: &'static str, value: String },
}

impl CandidateError {
    /// The same error, reported at a different (1-based) input line.
    pub fn at_line(self, lnum: usize) -> Self {
        match self {
            Self::MissingField { field, .. } =>
                Self::MissingField { line: lnum, field },
            Self::InvalidEnergy { field, value, .. } =>
                Self::InvalidEnergy { line: lnum, field, value },
            e => e,
        }
    }
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Json(e) => write!(f, "JSON parse error: {}", e),
            Self::MissingField { line, field } =>
                write!(f, "Line {line}: missing column '{field}'"),
            Self::InvalidEnergy { line, field, value } =>
                write!(f, "Line {line}: invalid {field} '{value}'"),
            Self::Unrepresentable { field, value } =>
                write!(f, "Cannot write {field} {value:?} as a table column"),
        }
    }
}

impl Error for CandidateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CandidateError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

impl From<serde_json::Error> for CandidateError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e) }
}

/// False for blank lines and `#` comments.
pub fn is_table_content(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

/// Parse one table line, reporting errors at the 1-based `lnum`.
pub fn parse_table_line(line: &str, lnum: usize) -> Result<CandidateRecord, CandidateError> {
    CandidateRecord::try_from(line).map_err(|e| e.at_line(lnum))
}

/// Parse a candidate table.
///
/// Empty lines and lines starting with `#` are ignored. Errors report the
/// 1-based line number.
pub fn read_candidate_table<R: BufRead>(reader: R) -> Result<Vec<CandidateRecord>, CandidateError> {
    let mut candidates = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if !is_table_content(&line) {
            continue;
        }
        candidates.push(parse_table_line(&line, i + 1)?);
    }
    Ok(candidates)
}

/// Write candidates in the tab-separated format read by
/// [read_candidate_table]. Fails before writing anything if a text field
/// contains a tab or line break.
pub fn write_candidate_table<W: Write>(
    mut writer: W,
    candidates: &[CandidateRecord],
) -> Result<(), CandidateError> {
    for c in candidates {
        if let Some((field, value)) = c.unrepresentable_field() {
            return Err(CandidateError::Unrepresentable { field, value: value.to_string() });
        }
    }
    for c in candidates {
        writeln!(writer, "{}", c.to_line())?;
    }
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct SerializableCandidates {
    candidates: Vec<CandidateRecord>,
}

/// JSON document of the form `{"candidates": [...]}`.
pub fn candidates_to_json(candidates: &[CandidateRecord]) -> Result<String, CandidateError> {
    let serial = SerializableCandidates { candidates: candidates.to_vec() };
    Ok(serde_json::to_string_pretty(&serial)?)
}

/// Inverse of [candidates_to_json].
pub fn candidates_from_json(data: &str) -> Result<Vec<CandidateRecord>, CandidateError> {
    let serial: SerializableCandidates = serde_json::from_str(data)?;
    Ok(serial.candidates)
}
