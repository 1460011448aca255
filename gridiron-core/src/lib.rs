//! Gridiron Core: ranking and percentile normalization for a season of team metrics.
//!
//! This crate turns raw per-team metrics into comparable standings:
//! - Domain types (team metric records, metric categories, populations)
//! - Percentile normalizer with count-based and dense-rank modes
//! - Weighted composite scorer with neutral fill for absent components
//! - Dense 1..N ranking table with an explicit tie-break policy
//! - Mean-split quadrant classifier, scatter builder and radar profiles
//! - Last-request-wins sequencing for callers that recompute on filter changes
//!
//! Every computation is a pure function of its inputs; a new population means
//! a full recompute.

pub mod composite;
pub mod config;
pub mod domain;
pub mod percentile;
pub mod quadrant;
pub mod radar;
pub mod ranking;
pub mod scatter;
pub mod sequence;

pub use composite::{
    composite_score, ComponentPercentiles, CompositeWeights, WeightsError, NEUTRAL_FILL,
};
pub use config::{ConfigError, EngineConfig};
pub use domain::{MetricCategory, Population, TeamId, TeamMetricRecord};
pub use percentile::{
    count_percentile, dense_rank_percentiles, metric_percentiles, percentile_column,
    PercentileMode, PercentileResult, TieBreak,
};
pub use quadrant::{classify, Point, Quadrant, QuadrantSplit};
pub use radar::{radar_profile, RadarProfile, RadarSpoke};
pub use ranking::{
    build_ranking, rank_population, RankedTeam, RankingColumn, RankingTable, SortDirection,
};
pub use scatter::{scatter, AxisScale, AxisSpec, Scatter, ScatterPoint};
pub use sequence::{RequestSequencer, RequestToken};
