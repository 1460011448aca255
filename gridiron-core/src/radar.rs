//! Radar profile: one team's count-based percentile on every metric.

use serde::{Deserialize, Serialize};

use crate::domain::{MetricCategory, Population, TeamId};
use crate::percentile::count_percentile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarSpoke {
    pub metric: MetricCategory,
    pub value: Option<f64>,
    /// Direction-aware, 100 = best. `None` when the team lacks the metric.
    pub percentile: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub team: TeamId,
    pub spokes: Vec<RadarSpoke>,
}

impl RadarProfile {
    pub fn spoke(&self, metric: MetricCategory) -> Option<&RadarSpoke> {
        self.spokes.iter().find(|s| s.metric == metric)
    }
}

/// Radar profile of `team` against `population`, or `None` if the team is
/// not in it.
pub fn radar_profile(population: &Population, team: &str) -> Option<RadarProfile> {
    let record = population.get(team)?;
    let spokes = MetricCategory::ALL
        .iter()
        .map(|&metric| {
            let value = metric.extract(record);
            let percentile = value.map(|v| {
                count_percentile(v, &population.column(metric), metric.is_higher_better())
            });
            RadarSpoke {
                metric,
                value,
                percentile,
            }
        })
        .collect();

    Some(RadarProfile {
        team: record.team.clone(),
        spokes,
    })
}
