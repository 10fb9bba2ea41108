use clap::Args;
use log::debug;
use rf_candidate::RankingRule;
use rf_candidate::RankingStrategy;

/// Candidate ranking parameters.
#[derive(Debug, Args)]
pub struct RankingArguments {
    /// Ranking strategy: "legacy" (final energy, then restricted energy,
    /// not a total order) or "total" (lexicographic with tie-breaks)
    #[arg(short, long, default_value = "legacy")]
    pub strategy: RankingStrategy,

    /// Number of best candidates to report
    #[arg(short = 'k', long, default_value_t = 1)]
    pub top: usize,
}

impl RankingArguments {
    pub fn build_rule(&self) -> Box<dyn RankingRule + Send + Sync> {
        debug!("Ranking strategy: {}", self.strategy);
        debug!("Reporting the top {} candidate(s)", self.top);
        self.strategy.build_rule()
    }
}
