//! Domain types for Gridiron

pub mod metric;
pub mod population;
pub mod record;

pub use metric::{MetricCategory, ParseMetricError};
pub use population::Population;
pub use record::TeamMetricRecord;

/// Team identifier type alias
pub type TeamId = String;
