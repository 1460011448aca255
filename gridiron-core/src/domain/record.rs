//! Raw per-team season metrics as supplied by the data-access layer.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// One team's raw statistics for one season.
///
/// Any metric may be absent (no data yet for that team/season). A record
/// with every metric absent carries nothing to rank and is dropped when a
/// [`Population`](super::Population) is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetricRecord {
    pub team: TeamId,
    #[serde(default)]
    pub conference: Option<String>,
    /// Offensive EPA per play.
    #[serde(default)]
    pub offense: Option<f64>,
    /// Defensive EPA per play allowed. Lower is better.
    #[serde(default)]
    pub defense: Option<f64>,
    #[serde(default)]
    pub special_teams: Option<f64>,
    /// Pre-computed strength-of-schedule rank, 1 = hardest schedule.
    #[serde(default)]
    pub strength_of_schedule_rank: Option<u32>,
}

impl TeamMetricRecord {
    /// A record with no metrics, to be filled in with the `with_*` builders.
    pub fn new(team: impl Into<TeamId>) -> Self {
        Self {
            team: team.into(),
            conference: None,
            offense: None,
            defense: None,
            special_teams: None,
            strength_of_schedule_rank: None,
        }
    }

    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }

    pub fn with_offense(mut self, value: f64) -> Self {
        self.offense = Some(value);
        self
    }

    pub fn with_defense(mut self, value: f64) -> Self {
        self.defense = Some(value);
        self
    }

    pub fn with_special_teams(mut self, value: f64) -> Self {
        self.special_teams = Some(value);
        self
    }

    pub fn with_sos_rank(mut self, rank: u32) -> Self {
        self.strength_of_schedule_rank = Some(rank);
        self
    }

    /// Whether at least one metric is present.
    ///
    /// Non-finite values count as absent; the data layer should never send
    /// them, but a NaN would poison every comparison downstream.
    pub fn has_any_metric(&self) -> bool {
        [self.offense, self.defense, self.special_teams]
            .iter()
            .any(|v| v.is_some_and(f64::is_finite))
            || self.strength_of_schedule_rank.is_some()
    }
}
