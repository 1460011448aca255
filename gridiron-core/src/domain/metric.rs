//! Metric categories: the closed set of per-team columns the engine normalizes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TeamMetricRecord;

/// Which per-team metric a percentile, axis, or radar spoke refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Offense,
    Defense,
    SpecialTeams,
    StrengthOfSchedule,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metric '{0}'. Valid: offense, defense, special_teams, sos")]
pub struct ParseMetricError(pub String);

impl MetricCategory {
    pub const ALL: [MetricCategory; 4] = [
        Self::Offense,
        Self::Defense,
        Self::SpecialTeams,
        Self::StrengthOfSchedule,
    ];

    /// The three components of the composite score.
    pub const COMPOSITE: [MetricCategory; 3] =
        [Self::Offense, Self::Defense, Self::SpecialTeams];

    /// Extract this metric from a record. Non-finite values read as absent.
    pub fn extract(&self, record: &TeamMetricRecord) -> Option<f64> {
        let value = match self {
            Self::Offense => record.offense,
            Self::Defense => record.defense,
            Self::SpecialTeams => record.special_teams,
            Self::StrengthOfSchedule => record.strength_of_schedule_rank.map(f64::from),
        };
        value.filter(|v| v.is_finite())
    }

    /// Whether higher raw values are better for this metric.
    ///
    /// Defense is EPA allowed, so less is better. Strength of schedule is a
    /// rank where 1 is the hardest slate.
    pub fn is_higher_better(&self) -> bool {
        matches!(self, Self::Offense | Self::SpecialTeams)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Offense => "Offense",
            Self::Defense => "Defense",
            Self::SpecialTeams => "Special Teams",
            Self::StrengthOfSchedule => "SOS",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetricCategory {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "offense" | "off" => Ok(Self::Offense),
            "defense" | "def" => Ok(Self::Defense),
            "special_teams" | "st" => Ok(Self::SpecialTeams),
            "sos" | "strength_of_schedule" => Ok(Self::StrengthOfSchedule),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TeamMetricRecord {
        TeamMetricRecord::new("Michigan")
            .with_offense(0.18)
            .with_defense(-0.12)
            .with_sos_rank(40)
    }

    #[test]
    fn extract_offense() {
        let r = sample_record();
        assert!((MetricCategory::Offense.extract(&r).unwrap() - 0.18).abs() < 1e-10);
    }

    #[test]
    fn extract_sos_as_float() {
        let r = sample_record();
        assert_eq!(MetricCategory::StrengthOfSchedule.extract(&r), Some(40.0));
    }

    #[test]
    fn extract_absent() {
        assert!(MetricCategory::SpecialTeams.extract(&sample_record()).is_none());
    }

    #[test]
    fn extract_nan_is_absent() {
        let r = TeamMetricRecord::new("A").with_offense(f64::NAN);
        assert!(MetricCategory::Offense.extract(&r).is_none());
    }

    #[test]
    fn direction() {
        assert!(MetricCategory::Offense.is_higher_better());
        assert!(MetricCategory::SpecialTeams.is_higher_better());
        assert!(!MetricCategory::Defense.is_higher_better());
        assert!(!MetricCategory::StrengthOfSchedule.is_higher_better());
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("OFF".parse::<MetricCategory>(), Ok(MetricCategory::Offense));
        assert_eq!("st".parse::<MetricCategory>(), Ok(MetricCategory::SpecialTeams));
        assert_eq!(
            "sos".parse::<MetricCategory>(),
            Ok(MetricCategory::StrengthOfSchedule)
        );
        assert!("rushing".parse::<MetricCategory>().is_err());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&MetricCategory::SpecialTeams).unwrap();
        assert_eq!(json, "\"special_teams\"");
    }
}
