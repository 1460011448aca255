//! Percentile normalization: raw metric values to 0–100 standing within a population.
//!
//! Two modes:
//! - **Count**: share of the population strictly below the value. Ties share a
//!   percentile and only the metric column is needed. Used for exploratory and
//!   radar-style comparisons.
//! - **DenseRank**: sort by goodness, assign 1-based ranks, map rank to
//!   percentile. Ties are not merged; the [`TieBreak`] policy decides which
//!   tied team sorts first. Used for the leaderboard.
//!
//! Both modes put 100 at the favorable end once `higher_is_better` is fixed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{MetricCategory, Population, TeamId};

/// Which normalization to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileMode {
    #[default]
    DenseRank,
    Count,
}

/// Order among teams whose sort values are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Team identifier ascending, so the result does not depend on input order.
    #[default]
    TeamName,
    /// Input order: the earlier record gets the better rank.
    InputOrder,
}

impl TieBreak {
    /// Compare two tied teams. `a`/`b` are input positions.
    pub fn compare(&self, a: (usize, &str), b: (usize, &str)) -> Ordering {
        match self {
            Self::TeamName => a.1.cmp(b.1).then(a.0.cmp(&b.0)),
            Self::InputOrder => a.0.cmp(&b.0),
        }
    }
}

/// One team's normalized standing on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileResult {
    pub team: TeamId,
    pub value: f64,
    pub percentile: f64,
}

/// Count-based percentile of `value` within `population`.
///
/// `count(population < value) / max(N - 1, 1) * 100`, inverted to
/// `100 - result` when lower is better. A single-entry population yields 0
/// (or 100 when inverted). A value above every member of a population it
/// does not belong to would land past 100 and is capped there.
pub fn count_percentile(value: f64, population: &[f64], higher_is_better: bool) -> f64 {
    debug_assert!(!population.is_empty(), "percentile of an empty population");

    let below = population.iter().filter(|&&v| v < value).count();
    let denom = population.len().saturating_sub(1).max(1);
    let pct = (below as f64 / denom as f64 * 100.0).min(100.0);

    if higher_is_better {
        pct
    } else {
        100.0 - pct
    }
}

/// Map a 1-based dense rank among `n` teams to a percentile.
///
/// Rank 1 → 100, rank `n` → 0, evenly spaced in between. A population of one
/// is rank 1 of 1 and gets 100.
pub fn rank_to_percentile(rank: usize, n: usize) -> f64 {
    debug_assert!(rank >= 1 && rank <= n.max(1));
    if n <= 1 {
        return 100.0;
    }
    (n - rank) as f64 / (n - 1) as f64 * 100.0
}

/// Dense-rank percentiles for `values`, returned in input order.
///
/// `tie_break` is consulted only for equal values and receives input
/// positions. Non-finite values rank below every finite one, whichever
/// direction is favorable.
pub fn dense_rank_percentiles<F>(values: &[f64], higher_is_better: bool, tie_break: F) -> Vec<f64>
where
    F: Fn(usize, usize) -> Ordering,
{
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let (va, vb) = (values[a], values[b]);
        let by_value = match (va.is_finite(), vb.is_finite()) {
            (true, true) if higher_is_better => vb.total_cmp(&va),
            (true, true) => va.total_cmp(&vb),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        };
        by_value.then_with(|| tie_break(a, b))
    });

    let mut percentiles = vec![0.0_f64; n];
    for (pos, &idx) in order.iter().enumerate() {
        percentiles[idx] = rank_to_percentile(pos + 1, n);
    }
    percentiles
}

/// Percentile of every record in `population` for one metric, indexed like
/// `population.records()`. Teams missing the metric get `None` and are left
/// out of everyone else's population for that metric.
pub fn metric_percentiles(
    population: &Population,
    category: MetricCategory,
    mode: PercentileMode,
    tie_break: TieBreak,
) -> Vec<Option<f64>> {
    let records = population.records();
    let indexed = population.indexed_column(category);
    let values: Vec<f64> = indexed.iter().map(|&(_, v)| v).collect();
    let higher = category.is_higher_better();

    let scored: Vec<f64> = match mode {
        PercentileMode::Count => values
            .iter()
            .map(|&v| count_percentile(v, &values, higher))
            .collect(),
        PercentileMode::DenseRank => dense_rank_percentiles(&values, higher, |a, b| {
            let (ia, ib) = (indexed[a].0, indexed[b].0);
            tie_break.compare((ia, records[ia].team.as_str()), (ib, records[ib].team.as_str()))
        }),
    };

    let mut out = vec![None; records.len()];
    for (&(idx, _), pct) in indexed.iter().zip(scored) {
        out[idx] = Some(pct);
    }
    out
}

/// Percentile rows for the teams that have `category`, in population order.
pub fn percentile_column(
    population: &Population,
    category: MetricCategory,
    mode: PercentileMode,
    tie_break: TieBreak,
) -> Vec<PercentileResult> {
    let percentiles = metric_percentiles(population, category, mode, tie_break);
    population
        .records()
        .iter()
        .zip(percentiles)
        .filter_map(|(record, pct)| {
            let value = category.extract(record)?;
            Some(PercentileResult {
                team: record.team.clone(),
                value,
                percentile: pct?,
            })
        })
        .collect()
}
