//! The set of teams one computation pass ranks against.
//!
//! Percentiles are always relative to the population currently in view. A
//! conference filter is a new population, and everything downstream is
//! re-derived from it; nothing is cached between passes.

use std::collections::HashSet;

use tracing::debug;

use super::{MetricCategory, TeamMetricRecord};

/// Usable records for one pass, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    records: Vec<TeamMetricRecord>,
}

impl Population {
    /// Build a population, dropping records with no metric present and any
    /// repeat of a team identifier already seen.
    pub fn new(records: impl IntoIterator<Item = TeamMetricRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut empty = 0usize;
        let mut duplicate = 0usize;

        for record in records {
            if !record.has_any_metric() {
                empty += 1;
                continue;
            }
            if !seen.insert(record.team.clone()) {
                duplicate += 1;
                continue;
            }
            kept.push(record);
        }

        if empty > 0 || duplicate > 0 {
            debug!(
                kept = kept.len(),
                empty, duplicate, "dropped records while building population"
            );
        }

        Self { records: kept }
    }

    pub fn from_records(records: &[TeamMetricRecord]) -> Self {
        Self::new(records.iter().cloned())
    }

    pub fn records(&self) -> &[TeamMetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, team: &str) -> Option<&TeamMetricRecord> {
        self.records.iter().find(|r| r.team == team)
    }

    /// Sub-population of one conference (case-insensitive match).
    pub fn filter_conference(&self, conference: &str) -> Self {
        self.filter(|r| {
            r.conference
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(conference))
        })
    }

    /// Sub-population of the records matching `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&TeamMetricRecord) -> bool,
    {
        Self {
            records: self.records.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }

    /// Present values of one metric. Teams missing it are left out, never
    /// zero-filled.
    pub fn column(&self, category: MetricCategory) -> Vec<f64> {
        self.records.iter().filter_map(|r| category.extract(r)).collect()
    }

    /// `(record index, value)` pairs for the teams that have `category`.
    pub fn indexed_column(&self, category: MetricCategory) -> Vec<(usize, f64)> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| category.extract(r).map(|v| (i, v)))
            .collect()
    }
}

impl FromIterator<TeamMetricRecord> for Population {
    fn from_iter<I: IntoIterator<Item = TeamMetricRecord>>(iter: I) -> Self {
        Self::new(iter)
    }
}
