use std::io::Write;
use log::{info, debug};
use colored::*;
use env_logger::Builder;
use clap::{Parser, ArgAction};
use anyhow::Result;

use rf_sequence::{to_rna, to_upper, ungapped, cut_point_remove};
use rf_sequence::{hamming_distance, hamming_distance_bound};
use rfold::input_parsers::read_sequences_input;


/// Hamming distances of sequences to the first (reference) sequence.
#[derive(Debug, Parser)]
#[command(name = "rf-hamming")]
#[command(author, version, about)]
pub struct Cli {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Only compare the first N positions
    #[arg(short, long, value_name = "N")]
    pub bound: Option<usize>,

    /// Compare sequences as given (no case folding, DNA->RNA, gap removal)
    #[arg(long)]
    pub raw: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

/// Uppercase RNA without gaps, and the strand break (if any) sliced out.
fn normalize(seq: &str) -> Result<(String, Option<usize>)> {
    let (seq, cp) = cut_point_remove(&ungapped(&to_upper(&to_rna(seq))))?;
    Ok((seq, cp))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut sequences = read_sequences_input(&cli.input)?.into_iter();
    // read_sequences never returns an empty list.
    let Some((header, reference)) = sequences.next() else {
        return Ok(());
    };

    let (reference, ref_cp) = if cli.raw { (reference, None) } else { normalize(&reference)? };
    if let Some(h) = header {
        println!("{}", h.yellow())
    }
    println!("{}", reference);
    debug!("Reference cut point: {:?}", ref_cp);

    for (header, seq) in sequences {
        let (seq, cp) = if cli.raw { (seq, None) } else { normalize(&seq)? };
        if cp != ref_cp {
            info!("Cut point {:?} differs from reference {:?}", cp, ref_cp);
        }
        let distance = match cli.bound {
            Some(n) => hamming_distance_bound(&reference, &seq, n),
            None => hamming_distance(&reference, &seq),
        };
        println!("{} {}", seq, format!("{:>4}", distance).green());
        if let Some(h) = header {
            info!("{}", h);
        }
    }

    Ok(())
}
