use clap::Parser;
use anyhow::Result;
use anyhow::anyhow;
use rand::rng;

use rf_sequence::random_string;
use rf_sequence::cut_point_insert;
use rf_sequence::to_rna;

/// Generate random sequences from a given alphabet.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random sequences", long_about = None)]
struct Args {
    /// Alphabet to choose from, comma-separated (e.g., A,C,G,U)
    #[arg(short, long, default_value = "A,C,G,U")]
    alphabet: String,

    /// Length of each generated sequence
    #[arg(short, long, default_value_t = 50)]
    length: usize,

    /// Number of sequences to generate
    #[arg(short, long, default_value_t = 1)]
    num: usize,

    /// Insert a strand break before this (1-based) position
    #[arg(short, long, default_value_t = 0)]
    cut_point: isize,

    /// Translate DNA letters (T) to RNA (U)
    #[arg(long)]
    rna: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let alphabet: Vec<char> = args.alphabet.split(',')
        .filter_map(|s| s.trim().chars().next())
        .collect();
    if alphabet.is_empty() {
        return Err(anyhow!("Empty alphabet '{}'", args.alphabet));
    }

    let mut rng = rng();

    for _ in 0..args.num {
        let mut seq = random_string(args.length, &alphabet, &mut rng)?;
        if args.rna {
            seq = to_rna(&seq);
        }
        println!("{}", cut_point_insert(&seq, args.cut_point));
    }

    Ok(())
}
