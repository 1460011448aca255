//! Composite scoring: weighted aggregation of component percentiles.
//!
//! `composite = offense * w.offense + defense * w.defense + st * w.special_teams`
//!
//! Offense and defense are weighted equally and dominate; special teams is
//! the third factor. A component the team has no data for is filled with the
//! neutral percentile (the population median, 50) so it neither helps nor
//! hurts the team against its peers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Percentile substituted for an absent component.
pub const NEUTRAL_FILL: f64 = 50.0;

/// Tolerance on the weight sum before a warning is logged.
const SUM_TOLERANCE: f64 = 1e-6;

/// Invalid weight configuration.
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("{component} weight must be non-negative, got {value}")]
    Negative { component: &'static str, value: f64 },
    #[error("{component} weight must be finite")]
    NonFinite { component: &'static str },
    #[error("at least one weight must be positive")]
    AllZero,
}

/// Per-component weights for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub offense: f64,
    pub defense: f64,
    pub special_teams: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            offense: 0.40,
            defense: 0.40,
            special_teams: 0.20,
        }
    }
}

impl CompositeWeights {
    pub fn new(offense: f64, defense: f64, special_teams: f64) -> Self {
        Self {
            offense,
            defense,
            special_teams,
        }
    }

    fn components(&self) -> [(&'static str, f64); 3] {
        [
            ("offense", self.offense),
            ("defense", self.defense),
            ("special_teams", self.special_teams),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.offense + self.defense + self.special_teams
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < SUM_TOLERANCE
    }

    pub fn is_non_negative(&self) -> bool {
        self.components().iter().all(|&(_, w)| w >= 0.0)
    }

    /// Reject weights a configuration collaborator must never supply.
    ///
    /// A sum other than 1.0 is not an error here; see
    /// [`warn_if_unnormalized`](Self::warn_if_unnormalized).
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (component, value) in self.components() {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { component });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { component, value });
            }
        }
        if self.sum() <= 0.0 {
            return Err(WeightsError::AllZero);
        }
        Ok(())
    }

    /// Log a warning when the weights do not sum to 1.0. Composite scores
    /// then leave the 0–100 range, but ordering is still meaningful.
    pub fn warn_if_unnormalized(&self) {
        if !self.is_normalized() {
            warn!(
                offense = self.offense,
                defense = self.defense,
                special_teams = self.special_teams,
                sum = self.sum(),
                "composite weights do not sum to 1.0"
            );
        }
    }
}

/// Weighted composite of three component percentiles.
pub fn composite_score(
    offense_pct: f64,
    defense_pct: f64,
    special_teams_pct: f64,
    weights: &CompositeWeights,
) -> f64 {
    debug_assert!(weights.is_non_negative(), "negative composite weight");

    offense_pct * weights.offense
        + defense_pct * weights.defense
        + special_teams_pct * weights.special_teams
}

/// Component percentiles of one team, any of which may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPercentiles {
    pub offense: Option<f64>,
    pub defense: Option<f64>,
    pub special_teams: Option<f64>,
}

impl ComponentPercentiles {
    /// Replace absent components with `fill`.
    pub fn filled(&self, fill: f64) -> [f64; 3] {
        [
            self.offense.unwrap_or(fill),
            self.defense.unwrap_or(fill),
            self.special_teams.unwrap_or(fill),
        ]
    }

    /// Composite score with absent components neutral-filled.
    pub fn composite(&self, weights: &CompositeWeights, fill: f64) -> f64 {
        let [off, def, st] = self.filled(fill);
        composite_score(off, def, st, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let w = CompositeWeights::default();
        assert!((w.offense - 0.40).abs() < 1e-10);
        assert!((w.defense - 0.40).abs() < 1e-10);
        assert!((w.special_teams - 0.20).abs() < 1e-10);
        assert!(w.is_normalized());
    }

    #[test]
    fn composite_formula() {
        let w = CompositeWeights::default();
        // 80*0.4 + 60*0.4 + 50*0.2 = 32 + 24 + 10
        assert!((composite_score(80.0, 60.0, 50.0, &w) - 66.0).abs() < 1e-10);
    }

    #[test]
    fn composite_extremes() {
        let w = CompositeWeights::default();
        assert!((composite_score(100.0, 100.0, 100.0, &w) - 100.0).abs() < 1e-10);
        assert!(composite_score(0.0, 0.0, 0.0, &w).abs() < 1e-10);
    }

    #[test]
    fn neutral_fill_matches_median_special_teams() {
        let w = CompositeWeights::default();
        let missing = ComponentPercentiles {
            offense: Some(70.0),
            defense: Some(30.0),
            special_teams: None,
        };
        let median = ComponentPercentiles {
            special_teams: Some(50.0),
            ..missing
        };
        assert!(
            (missing.composite(&w, NEUTRAL_FILL) - median.composite(&w, NEUTRAL_FILL)).abs()
                < 1e-10
        );
    }

    #[test]
    fn neutral_fill_is_not_zero() {
        let w = CompositeWeights::default();
        let missing = ComponentPercentiles {
            offense: Some(50.0),
            defense: Some(50.0),
            special_teams: None,
        };
        assert!((missing.composite(&w, NEUTRAL_FILL) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn validate_rejects_negative() {
        let w = CompositeWeights::new(0.6, 0.6, -0.2);
        assert_eq!(
            w.validate(),
            Err(WeightsError::Negative {
                component: "special_teams",
                value: -0.2
            })
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative composite weight")]
    fn composite_with_negative_weight_panics() {
        composite_score(50.0, 50.0, 50.0, &CompositeWeights::new(0.6, 0.6, -0.2));
    }

    #[test]
    fn validate_rejects_nan() {
        let w = CompositeWeights::new(f64::NAN, 0.5, 0.5);
        assert_eq!(
            w.validate(),
            Err(WeightsError::NonFinite { component: "offense" })
        );
    }

    #[test]
    fn validate_rejects_all_zero() {
        assert_eq!(
            CompositeWeights::new(0.0, 0.0, 0.0).validate(),
            Err(WeightsError::AllZero)
        );
    }

    #[test]
    fn unnormalized_weights_are_valid() {
        let w = CompositeWeights::new(1.0, 1.0, 0.5);
        assert!(w.validate().is_ok());
        assert!(!w.is_normalized());
    }

    #[test]
    fn deserialize_partial_uses_defaults() {
        let w: CompositeWeights = serde_json::from_str(r#"{"offense":0.5,"defense":0.3}"#).unwrap();
        assert!((w.offense - 0.5).abs() < 1e-10);
        assert!((w.special_teams - 0.20).abs() < 1e-10);
    }
}
