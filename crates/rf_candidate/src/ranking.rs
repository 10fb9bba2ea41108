use std::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use log::debug;

use crate::CandidateRecord;

/// Is `x` strictly better than `y`?
///
/// A candidate is better if it reaches a lower final energy. Otherwise it
/// is better if its restricted energy is lower, even if its final energy
/// is higher. This is *not* a strict weak ordering: the fallback is
/// checked in both directions independently, so cycles like x > y > z > x
/// exist (see tests). Use [TotalRanking] where a consistent order is
/// required.
pub fn is_better(x: &CandidateRecord, y: &CandidateRecord) -> bool {
    if x.final_energy() < y.final_energy() {
        return true;
    }
    if x.restricted_energy() < y.restricted_energy() {
        return true;
    }
    false
}

/// Decides which of two candidates is better.
pub trait RankingRule {
    fn is_better(&self, x: &CandidateRecord, y: &CandidateRecord) -> bool;

    fn name(&self) -> &'static str;
}

/// The historic ranking, see [is_better].
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyRanking;

impl RankingRule for LegacyRanking {
    fn is_better(&self, x: &CandidateRecord, y: &CandidateRecord) -> bool {
        is_better(x, y)
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}

/// Lexicographic total order on final energy, restricted energy,
/// sequence and restriction. Energies use `f64::total_cmp`, so NaN sorts
/// after all numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalRanking;

impl TotalRanking {
    pub fn compare(&self, x: &CandidateRecord, y: &CandidateRecord) -> Ordering {
        x.final_energy().total_cmp(&y.final_energy())
            .then_with(|| x.restricted_energy().total_cmp(&y.restricted_energy()))
            .then_with(|| x.sequence().cmp(y.sequence()))
            .then_with(|| x.restriction().cmp(y.restriction()))
    }
}

impl RankingRule for TotalRanking {
    fn is_better(&self, x: &CandidateRecord, y: &CandidateRecord) -> bool {
        self.compare(x, y) == Ordering::Less
    }

    fn name(&self) -> &'static str {
        "total"
    }
}

/// Choice of ranking rule, e.g. from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingStrategy {
    #[default]
    Legacy,
    Total,
}

impl RankingStrategy {
    pub fn build_rule(&self) -> Box<dyn RankingRule + Send + Sync> {
        match self {
            RankingStrategy::Legacy => Box::new(LegacyRanking),
            RankingStrategy::Total => Box::new(TotalRanking),
        }
    }
}

impl FromStr for RankingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(RankingStrategy::Legacy),
            "total" => Ok(RankingStrategy::Total),
            _ => Err(format!("Unknown ranking strategy '{}' (expected legacy or total)", s)),
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingStrategy::Legacy => write!(f, "legacy"),
            RankingStrategy::Total => write!(f, "total"),
        }
    }
}

/// The best candidate according to `rule`.
///
/// Scans left to right and only replaces the current best if a candidate
/// is strictly better, so the first of several equally good candidates
/// wins. With [LegacyRanking] the result depends on input order.
///
/// ```rust
/// use rf_candidate::{CandidateRecord, LegacyRanking, select_best};
///
/// let cs = vec![
///     CandidateRecord::new("GGGAAACCC", "x........", -0.5, "(((...)))", -1.2, -1.5),
///     CandidateRecord::new("GGGAAACCC", "........x", -0.9, "(((...)))", -1.2, -1.5),
/// ];
/// let best = select_best(&cs, &LegacyRanking).unwrap();
/// assert_eq!(best.restriction(), "........x");
/// ```
pub fn select_best<'a, R: RankingRule + ?Sized>(
    candidates: &'a [CandidateRecord],
    rule: &R,
) -> Option<&'a CandidateRecord> {
    let mut iter = candidates.iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if rule.is_better(candidate, best) {
            best = candidate;
        }
    }
    Some(best)
}

/// The `k` best candidates, best first.
///
/// Repeated [select_best] over the remaining candidates. This only relies
/// on `rule.is_better` and therefore also works for rules that are not a
/// total order, where a regular sort may panic or give arbitrary results.
pub fn select_top<'a, R: RankingRule + ?Sized>(
    candidates: &'a [CandidateRecord],
    k: usize,
    rule: &R,
) -> Vec<&'a CandidateRecord> {
    let mut remaining: Vec<&CandidateRecord> = candidates.iter().collect();
    let mut top = Vec::with_capacity(k.min(candidates.len()));

    while top.len() < k && !remaining.is_empty() {
        let mut bi = 0;
        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            if rule.is_better(candidate, remaining[bi]) {
                bi = i;
            }
        }
        top.push(remaining.remove(bi));
    }
    debug!("Selected {} of {} candidates ({} ranking).", top.len(), candidates.len(), rule.name());
    top
}

/// Sort candidates best first using [TotalRanking].
pub fn sort_candidates(candidates: &mut [CandidateRecord]) {
    candidates.sort_by(|x, y| TotalRanking.compare(x, y));
}

/// A candidate ordered by [TotalRanking], for use in ordered containers.
///
/// ```rust
/// use std::collections::BTreeSet;
/// use rf_candidate::{CandidateRecord, RankedCandidate};
///
/// let mut set = BTreeSet::new();
/// set.insert(RankedCandidate(CandidateRecord::new("A", ".", 0.0, ".", -1.0, -1.0)));
/// set.insert(RankedCandidate(CandidateRecord::new("C", ".", 0.0, ".", -2.0, -2.0)));
/// assert_eq!(set.first().unwrap().0.sequence(), "C");
/// ```
#[derive(Debug, Clone)]
pub struct RankedCandidate(pub CandidateRecord);

impl PartialEq for RankedCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedCandidate {}

impl PartialOrd for RankedCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        TotalRanking.compare(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn cand(seq: &str, restricted_energy: f64, final_energy: f64) -> CandidateRecord {
        CandidateRecord::new(seq, "........", restricted_energy, "........", final_energy, final_energy - 0.5)
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shareable_across_threads() {
        assert_send_sync::<CandidateRecord>();
        assert_send_sync::<LegacyRanking>();
        assert_send_sync::<TotalRanking>();
        assert_send_sync::<RankingStrategy>();
        assert_send_sync::<RankedCandidate>();
    }

    #[test]
    fn test_lower_final_energy_wins() {
        let x = cand("X", -2.0, -5.0);
        let y = cand("Y", -10.0, -4.0);
        assert!(is_better(&x, &y));
    }

    #[test]
    fn test_equal_final_energy_falls_back_to_restricted() {
        let x = cand("X", -1.0, -3.0);
        let y = cand("Y", 0.0, -3.0);
        assert!(is_better(&x, &y));
        assert!(!is_better(&y, &x));
    }

    #[test]
    fn test_identical_energies_tie() {
        let x = cand("X", -1.0, -3.0);
        let y = cand("Y", -1.0, -3.0);
        assert!(!is_better(&x, &y));
        assert!(!is_better(&y, &x));
    }

    #[test]
    fn test_fallback_ignores_worse_final_energy() {
        // Higher final energy, but lower restricted energy: still "better".
        let x = cand("X", -10.0, -1.0);
        let y = cand("Y", -2.0, -5.0);
        assert!(is_better(&x, &y));
        assert!(is_better(&y, &x));
    }

    #[test]
    fn test_legacy_ranking_is_not_transitive() {
        let x = cand("X", 0.0, -1.0);
        let y = cand("Y", -10.0, 0.0);
        let z = cand("Z", -5.0, -2.0);
        assert!(is_better(&x, &y));
        assert!(is_better(&y, &z));
        assert!(!is_better(&x, &z));
        // ... and it even closes a cycle.
        assert!(is_better(&z, &x));
    }

    #[test]
    fn test_nan_is_never_better() {
        let x = cand("X", f64::NAN, f64::NAN);
        let y = cand("Y", -1.0, -1.0);
        assert!(!is_better(&x, &y));
        assert!(!is_better(&y, &x));
    }

    #[test]
    fn test_legacy_rule_matches_predicate() {
        let x = cand("X", 0.0, -1.0);
        let y = cand("Y", -10.0, 0.0);
        assert_eq!(LegacyRanking.is_better(&x, &y), is_better(&x, &y));
        assert_eq!(LegacyRanking.is_better(&y, &x), is_better(&y, &x));
    }

    #[test]
    fn test_total_ranking_order() {
        let a = cand("A", -1.0, -5.0);
        let b = cand("B", -3.0, -4.0);
        let c = cand("C", -2.0, -4.0);
        let d = cand("D", -2.0, -4.0);
        assert_eq!(TotalRanking.compare(&a, &b), Ordering::Less);
        assert_eq!(TotalRanking.compare(&b, &c), Ordering::Less);
        assert_eq!(TotalRanking.compare(&c, &d), Ordering::Less);
        assert_eq!(TotalRanking.compare(&d, &d), Ordering::Equal);
        assert!(TotalRanking.is_better(&a, &d));
        assert!(!TotalRanking.is_better(&d, &a));
    }

    #[test]
    fn test_total_ranking_breaks_legacy_cycle() {
        let x = cand("X", 0.0, -1.0);
        let y = cand("Y", -10.0, 0.0);
        let z = cand("Z", -5.0, -2.0);
        assert!(TotalRanking.is_better(&z, &x));
        assert!(TotalRanking.is_better(&x, &y));
        assert!(TotalRanking.is_better(&z, &y));
        assert!(!TotalRanking.is_better(&y, &z));
    }

    #[test]
    fn test_total_ranking_nan_last() {
        let x = cand("X", 0.0, f64::NAN);
        let y = cand("Y", 0.0, 100.0);
        assert!(TotalRanking.is_better(&y, &x));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("legacy".parse::<RankingStrategy>(), Ok(RankingStrategy::Legacy));
        assert_eq!("Total".parse::<RankingStrategy>(), Ok(RankingStrategy::Total));
        assert!("best".parse::<RankingStrategy>().is_err());
        assert_eq!(RankingStrategy::Total.to_string(), "total");
        assert_eq!(RankingStrategy::default().build_rule().name(), "legacy");
    }

    #[test]
    fn test_select_best() {
        let cs = vec![cand("A", -1.0, -2.0), cand("B", -1.0, -3.0), cand("C", -4.0, -3.0)];
        assert_eq!(select_best(&cs, &LegacyRanking).unwrap().sequence(), "C");
        assert_eq!(select_best(&cs, &TotalRanking).unwrap().sequence(), "C");
        assert!(select_best(&[], &TotalRanking).is_none());
    }

    #[test]
    fn test_select_best_first_of_ties() {
        let cs = vec![cand("A", -1.0, -3.0), cand("B", -1.0, -3.0)];
        assert_eq!(select_best(&cs, &LegacyRanking).unwrap().sequence(), "A");
    }

    #[test]
    fn test_select_best_legacy_depends_on_order() {
        let x = cand("X", 0.0, -1.0);
        let y = cand("Y", -10.0, 0.0);
        let z = cand("Z", -5.0, -2.0);
        let fwd = vec![x.clone(), y.clone(), z.clone()];
        let rev = vec![z, y, x];
        assert_eq!(select_best(&fwd, &LegacyRanking).unwrap().sequence(), "Z");
        assert_eq!(select_best(&rev, &LegacyRanking).unwrap().sequence(), "X");
    }

    #[test]
    fn test_select_top() {
        let cs = vec![
            cand("A", -1.0, -2.0),
            cand("B", -1.0, -6.0),
            cand("C", -4.0, -3.0),
            cand("D", -2.0, -3.0),
        ];
        let top: Vec<&str> = select_top(&cs, 3, &TotalRanking).iter().map(|c| c.sequence()).collect();
        assert_eq!(top, vec!["B", "C", "D"]);

        // C wins over B on restricted energy alone.
        let all = select_top(&cs, 10, &LegacyRanking);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].sequence(), "C");
        assert!(select_top(&cs, 0, &LegacyRanking).is_empty());
    }

    #[test]
    fn test_select_top_survives_legacy_cycle() {
        let cs = vec![cand("X", 0.0, -1.0), cand("Y", -10.0, 0.0), cand("Z", -5.0, -2.0)];
        let top = select_top(&cs, 3, &LegacyRanking);
        let names: Vec<&str> = top.iter().map(|c| c.sequence()).collect();
        assert_eq!(names, vec!["Z", "Y", "X"]);
    }

    #[test]
    fn test_sort_candidates() {
        let mut cs = vec![cand("B", 0.0, -1.0), cand("A", 0.0, -1.0), cand("C", 0.0, -9.0)];
        sort_candidates(&mut cs);
        let names: Vec<&str> = cs.iter().map(|c| c.sequence()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_ranked_candidate_in_btreeset() {
        let mut set = BTreeSet::new();
        set.insert(RankedCandidate(cand("A", 0.0, -1.0)));
        set.insert(RankedCandidate(cand("B", 0.0, -3.0)));
        set.insert(RankedCandidate(cand("A", 0.0, -1.0)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.first().unwrap().0.sequence(), "B");
    }
}
