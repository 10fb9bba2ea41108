use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::*;
use log::warn;
use paste::paste;
use rf_candidate::CandidateRecord;
use rf_candidate::candidate_io::{is_table_content, parse_table_line, read_candidate_table};

// ============================================================
//  Candidate tables supporting lenient/strict modes
// ============================================================

#[derive(Clone, Copy)]
enum TableMode {
    Lenient,
    Strict,
}

/// Core parsing logic shared by all candidate table adapters.
///
/// Strict mode is the library table reader; lenient mode skips (and
/// warns about) malformed lines.
fn parse_candidates<R: BufRead>(reader: R, mode: TableMode) -> Result<Vec<CandidateRecord>> {
    let candidates = match mode {
        TableMode::Strict => read_candidate_table(reader)?,
        TableMode::Lenient => {
            let mut candidates = Vec::new();
            for (i, line) in reader.lines().enumerate() {
                let line = line?;
                if !is_table_content(&line) {
                    continue;
                }
                match parse_table_line(&line, i + 1) {
                    Ok(c) => candidates.push(c),
                    Err(e) => warn!("{} {} -> line skipped", "WARNING:".red(), e),
                }
            }
            candidates
        }
    };

    if candidates.is_empty() {
        return Err(anyhow!("No candidates found in input"));
    }
    Ok(candidates)
}

/// Sequences of a FASTA-like input, one per line, with optional headers.
///
/// Only the first whitespace-separated token of a sequence line is used,
/// so trailing annotations (energies, etc.) are ignored.
fn parse_sequences<R: BufRead>(reader: R) -> Result<Vec<(Option<String>, String)>> {
    let mut header: Option<String> = None;
    let mut sequences = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            header = Some(line.to_string());
        } else if let Some(token) = line.split_whitespace().next() {
            sequences.push((header.take(), token.to_string()));
        }
    }

    if sequences.is_empty() {
        return Err(anyhow!("Missing sequence line"));
    }
    Ok(sequences)
}

// ============================================================
//  Base parser functions
// ============================================================

pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<CandidateRecord>> {
    parse_candidates(reader, TableMode::Strict)
}

pub fn read_candidates_lenient<R: BufRead>(reader: R) -> Result<Vec<CandidateRecord>> {
    parse_candidates(reader, TableMode::Lenient)
}

pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<(Option<String>, String)>> {
    parse_sequences(reader)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
///
/// Example:
/// ```ignore
/// define_input_variants!(read_candidates, Result<Vec<CandidateRecord>>);
/// ```
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type CandidateResult = Result<Vec<CandidateRecord>>;
type SequenceResult = Result<Vec<(Option<String>, String)>>;

define_input_variants!(read_candidates, CandidateResult);
define_input_variants!(read_candidates_lenient, CandidateResult);
define_input_variants!(read_sequences, SequenceResult);

// ============================================================
//  Output helper: ruler()
// ============================================================

pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut c = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = format!("{}", i / 10);
            c = t.len() - 1;
            s.push_str(&t);
            continue;
        } else if c > 0 {
            c -= 1;
            continue;
        }
        if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}

// ============================================================
//  Unit tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# two candidates for the same hairpin
GGGGAAAACCCC xxx......... -1.2 ((((....)))) -4.1 -4.52
GGGGAAAACCCC .........xxx -0.8 .(((....))). -2.3 -4.52
";

    #[test]
    fn test_ruler() {
        assert_eq!(ruler(0), "0");
        assert_eq!(ruler(5), "0....,");
        assert_eq!(ruler(10), "0....,....1");
    }

    #[test]
    fn test_read_candidates_basic() {
        let cs = read_candidates_string(TABLE).unwrap();
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0].final_energy(), -4.1);
        assert_eq!(cs[1].restriction(), ".........xxx");
    }

    #[test]
    fn test_read_candidates_strict_vs_lenient() {
        let input = format!("{}ACGU .... oops .... -1.0 -1.0\n", TABLE);

        let err = read_candidates_string(&input);
        assert!(err.is_err(), "Malformed line should fail in strict mode");
        let msg = err.unwrap_err().to_string();
        assert!(msg.contains("Line 4"), "unexpected message: {}", msg);

        let ok = read_candidates_lenient_string(&input).unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn test_read_candidates_tab_separated_empty_restriction() {
        let input = "ACGU\t\t-1\t....\t-2\t-3\nACGU\tx...\t-1.5\t....\t-2\t-3\n";
        let cs = read_candidates_string(input).unwrap();
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0].restriction(), "");
        assert_eq!(read_candidates_lenient_string(input).unwrap(), cs);
    }

    #[test]
    fn test_read_candidates_empty() {
        assert!(read_candidates_string("# nothing here\n\n").is_err());
    }

    #[test]
    fn test_read_sequences() {
        let input = ">first\nGGGG&CCCC -3.20\nggga\n\n>third\nAC-GU\n";
        let seqs = read_sequences_string(input).unwrap();
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0], (Some(">first".to_string()), "GGGG&CCCC".to_string()));
        assert_eq!(seqs[1], (None, "ggga".to_string()));
        assert_eq!(seqs[2].0.as_deref(), Some(">third"));
        assert!(read_sequences_string(">only a header\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(read_candidates_file("/nonexistent/candidates.tsv").is_err());
    }
}
