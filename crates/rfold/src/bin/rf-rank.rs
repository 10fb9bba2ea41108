use std::io::Write;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use rf_candidate::select_top;
use rf_candidate::candidate_io::candidates_to_json;

use rfold::input_parsers::ruler;
use rfold::input_parsers::read_candidates_input;
use rfold::input_parsers::read_candidates_lenient_input;
use rfold::ranking_parsers::RankingArguments;


#[derive(Debug, Args)]
pub struct RankInput {
    /// Candidate table, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Skip malformed lines instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Print the selected candidates as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "rf-rank")]
#[command(author, version, about = "Select the best restricted folding candidates")]
pub struct Cli {
    #[command(flatten)]
    pub rank: RankInput,

    #[command(flatten, next_help_heading = "Ranking parameters")]
    pub ranking: RankingArguments,
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

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.rank.verbose);

    let rule = cli.ranking.build_rule();

    let candidates = if cli.rank.lenient {
        read_candidates_lenient_input(&cli.rank.input)?
    } else {
        read_candidates_input(&cli.rank.input)?
    };
    info!("Read {} candidates.", candidates.len());

    let top = select_top(&candidates, cli.ranking.top, rule.as_ref());

    if cli.rank.json {
        let selected: Vec<_> = top.into_iter().cloned().collect();
        println!("{}", candidates_to_json(&selected)?);
        return Ok(());
    }

    for (rank, c) in top.iter().enumerate() {
        println!("{}", format!("# {} ({})", rank + 1, rule.name()).yellow());
        info!("{}", ruler(c.sequence().len().saturating_sub(1)).magenta());
        println!("{}", c.sequence());
        println!("{} {}", c.restriction(), format!("{:>6.2}", c.restricted_energy()).cyan());
        println!("{} {} {}",
            c.final_structure(),
            format!("{:>6.2}", c.final_energy()).green(),
            format!("({:.2})", c.ensemble_energy()).blue(),
        );
    }

    Ok(())
}
