//! Ranking table: dense 1..N leaderboard by composite score.
//!
//! One pass:
//! 1. Drop records with none of the composite components present.
//! 2. Dense-rank percentiles per component against the remaining teams.
//! 3. Composite per team, absent components neutral-filled.
//! 4. Sort descending by composite, `rank = index + 1`.
//!
//! The table is rebuilt from scratch whenever the population changes; rows are
//! never patched in place.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composite::{ComponentPercentiles, CompositeWeights};
use crate::config::EngineConfig;
use crate::domain::{MetricCategory, Population, TeamId, TeamMetricRecord};
use crate::percentile::{metric_percentiles, PercentileMode};

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeam {
    pub rank: usize,
    pub team: TeamId,
    pub conference: Option<String>,
    pub composite_score: f64,
    pub offense_percentile: f64,
    pub defense_percentile: f64,
    pub special_teams_percentile: f64,
    /// Passed through from the record; not part of the composite.
    pub strength_of_schedule_rank: Option<u32>,
    /// Components that were absent and neutral-filled.
    pub neutral_filled: Vec<MetricCategory>,
}

/// Column a renderer may sort a ranking view by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingColumn {
    #[default]
    Rank,
    Team,
    Composite,
    Offense,
    Defense,
    SpecialTeams,
    StrengthOfSchedule,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Leaderboard produced by one ranking pass, ordered by rank ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingTable {
    rows: Vec<RankedTeam>,
}

impl RankingTable {
    pub fn rows(&self) -> &[RankedTeam] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<RankedTeam> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, team: &str) -> Option<&RankedTeam> {
        self.rows.iter().find(|r| r.team == team)
    }

    /// Rows re-ordered for display. Ranks are unchanged; ties in the chosen
    /// column fall back to rank order.
    pub fn sorted_by(&self, column: RankingColumn, direction: SortDirection) -> Vec<&RankedTeam> {
        let mut view: Vec<&RankedTeam> = self.rows.iter().collect();
        view.sort_by(|a, b| {
            let ord = compare_column(a, b, column);
            let ord = match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            ord.then(a.rank.cmp(&b.rank))
        });
        view
    }
}

fn compare_column(a: &RankedTeam, b: &RankedTeam, column: RankingColumn) -> Ordering {
    let by_f64 = |x: f64, y: f64| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match column {
        RankingColumn::Rank => a.rank.cmp(&b.rank),
        RankingColumn::Team => a.team.cmp(&b.team),
        RankingColumn::Composite => by_f64(a.composite_score, b.composite_score),
        RankingColumn::Offense => by_f64(a.offense_percentile, b.offense_percentile),
        RankingColumn::Defense => by_f64(a.defense_percentile, b.defense_percentile),
        RankingColumn::SpecialTeams => {
            by_f64(a.special_teams_percentile, b.special_teams_percentile)
        }
        // Unranked schedules count as easier than any ranked one.
        RankingColumn::StrengthOfSchedule => {
            match (a.strength_of_schedule_rank, b.strength_of_schedule_rank) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    }
}

/// Rank `records` with `weights` and the default tie-break and neutral fill.
///
/// Empty input gives an empty ranking.
pub fn build_ranking(records: &[TeamMetricRecord], weights: &CompositeWeights) -> Vec<RankedTeam> {
    let population = Population::from_records(records);
    rank_population(&population, &EngineConfig::with_weights(*weights)).into_rows()
}

/// Rank an already-built population under `config`.
pub fn rank_population(population: &Population, config: &EngineConfig) -> RankingTable {
    config.weights.warn_if_unnormalized();

    let scored = population.filter(|r| {
        MetricCategory::COMPOSITE
            .iter()
            .any(|c| c.extract(r).is_some())
    });
    if scored.len() < population.len() {
        debug!(
            dropped = population.len() - scored.len(),
            "records without composite components left out of ranking"
        );
    }
    if scored.is_empty() {
        return RankingTable::default();
    }

    let [off, def, st] = MetricCategory::COMPOSITE.map(|c| {
        metric_percentiles(&scored, c, PercentileMode::DenseRank, config.tie_break)
    });

    let records = scored.records();
    let mut rows: Vec<(usize, RankedTeam)> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let components = ComponentPercentiles {
                offense: off[i],
                defense: def[i],
                special_teams: st[i],
            };
            let [o, d, s] = components.filled(config.neutral_fill);
            let neutral_filled = MetricCategory::COMPOSITE
                .iter()
                .zip([off[i], def[i], st[i]])
                .filter(|(_, pct)| pct.is_none())
                .map(|(&c, _)| c)
                .collect();

            let row = RankedTeam {
                rank: 0,
                team: record.team.clone(),
                conference: record.conference.clone(),
                composite_score: components.composite(&config.weights, config.neutral_fill),
                offense_percentile: o,
                defense_percentile: d,
                special_teams_percentile: s,
                strength_of_schedule_rank: record.strength_of_schedule_rank,
                neutral_filled,
            };
            (i, row)
        })
        .collect();

    rows.sort_by(|(ia, a), (ib, b)| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                config
                    .tie_break
                    .compare((*ia, a.team.as_str()), (*ib, b.team.as_str()))
            })
    });

    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(pos, (_, mut row))| {
            row.rank = pos + 1;
            row
        })
        .collect();

    RankingTable { rows }
}
