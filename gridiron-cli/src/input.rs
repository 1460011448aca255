//! CSV input: one row per team for a single season.
//!
//! ```csv
//! team,conference,offense,defense,special_teams,sos_rank
//! Georgia,SEC,0.22,-0.18,0.6,4
//! Vanderbilt,SEC,-0.05,0.08,,1
//! ```
//!
//! Every column but `team` is optional, and an empty cell means "no data".

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use gridiron_core::TeamMetricRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: team is empty")]
    MissingTeam { row: usize },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    team: String,
    #[serde(default)]
    conference: Option<String>,
    #[serde(default)]
    offense: Option<f64>,
    #[serde(default)]
    defense: Option<f64>,
    #[serde(default)]
    special_teams: Option<f64>,
    #[serde(default)]
    sos_rank: Option<u32>,
}

impl From<CsvRow> for TeamMetricRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            team: row.team,
            conference: row.conference.filter(|c| !c.is_empty()),
            offense: row.offense,
            defense: row.defense,
            special_teams: row.special_teams,
            strength_of_schedule_rank: row.sos_rank,
        }
    }
}

/// Parse team records from any CSV source.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TeamMetricRecord>, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in csv.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        // Header is line 1, so data row i sits on line i + 2.
        if row.team.is_empty() {
            return Err(LoadError::MissingTeam { row: i + 2 });
        }
        let record = TeamMetricRecord::from(row);
        if !record.has_any_metric() {
            warn!(team = %record.team, "no metrics for team, it will not be ranked");
        }
        records.push(record);
    }

    debug!(count = records.len(), "loaded team records");
    Ok(records)
}

pub fn load_records(path: &Path) -> Result<Vec<TeamMetricRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}
