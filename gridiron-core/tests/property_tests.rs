//! Property tests for normalization and ranking invariants.
//!
//! Uses proptest to verify:
//! 1. Percentile monotonicity: a better raw value never gets a lower percentile
//! 2. Inversion symmetry: count-based percentile flips exactly around 100
//! 3. Composite bounds: normalized weights keep the composite within [0, 100]
//! 4. Dense rank completeness: ranks are exactly 1..=N
//! 5. Neutral fill: missing special teams scores like a 50th-percentile unit

use proptest::prelude::*;
use std::collections::HashSet;

use gridiron_core::{
    build_ranking, composite_score, count_percentile, dense_rank_percentiles, metric_percentiles,
    ComponentPercentiles, CompositeWeights, MetricCategory, PercentileMode, Population,
    TeamMetricRecord, TieBreak, NEUTRAL_FILL,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_metric() -> impl Strategy<Value = f64> {
    (-0.5..0.5_f64).prop_map(|v| (v * 1000.0).round() / 1000.0)
}

fn arb_population() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_metric(), 1..60)
}

fn arb_percentile() -> impl Strategy<Value = f64> {
    0.0..=100.0_f64
}

/// Non-negative weights normalized to sum to 1.0.
fn arb_weights() -> impl Strategy<Value = CompositeWeights> {
    (0.0..1.0_f64, 0.0..1.0_f64, 0.0..1.0_f64)
        .prop_filter("at least one positive weight", |(a, b, c)| a + b + c > 1e-6)
        .prop_map(|(a, b, c)| {
            let sum = a + b + c;
            CompositeWeights::new(a / sum, b / sum, c / sum)
        })
}

fn arb_record(idx: usize) -> impl Strategy<Value = TeamMetricRecord> {
    (
        prop::option::of(arb_metric()),
        prop::option::of(arb_metric()),
        prop::option::of(arb_metric()),
    )
        .prop_map(move |(off, def, st)| TeamMetricRecord {
            team: format!("Team {idx:03}"),
            conference: None,
            offense: off,
            defense: def,
            special_teams: st,
            strength_of_schedule_rank: None,
        })
}

fn arb_records() -> impl Strategy<Value = Vec<TeamMetricRecord>> {
    (0usize..40).prop_flat_map(|n| (0..n).map(arb_record).collect::<Vec<_>>())
}

// ── 1. Monotonicity ──────────────────────────────────────────────────

proptest! {
    /// For a fixed population, a > b implies pct(a) >= pct(b).
    #[test]
    fn count_percentile_monotonic(
        population in arb_population(),
        a in arb_metric(),
        b in arb_metric(),
    ) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(
            count_percentile(hi, &population, true) >= count_percentile(lo, &population, true)
        );
    }

    /// Lower-is-better flips the direction of monotonicity.
    #[test]
    fn count_percentile_monotonic_inverted(
        population in arb_population(),
        a in arb_metric(),
        b in arb_metric(),
    ) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(
            count_percentile(lo, &population, false) >= count_percentile(hi, &population, false)
        );
    }

    /// Dense-rank percentiles order the same way as the raw values.
    #[test]
    fn dense_rank_monotonic(values in arb_population()) {
        let pct = dense_rank_percentiles(&values, true, |a, b| a.cmp(&b));
        for i in 0..values.len() {
            for j in 0..values.len() {
                if values[i] > values[j] {
                    prop_assert!(pct[i] > pct[j]);
                }
            }
        }
    }

    /// Every percentile lands in [0, 100], member of the population or not.
    #[test]
    fn count_percentile_bounded(population in arb_population(), v in -1.0..1.0_f64) {
        for higher in [true, false] {
            let p = count_percentile(v, &population, higher);
            prop_assert!((0.0..=100.0).contains(&p), "percentile {p} out of range");
        }
    }
}

// ── 2. Inversion symmetry ────────────────────────────────────────────

proptest! {
    #[test]
    fn count_percentile_inversion_symmetry(population in arb_population(), v in arb_metric()) {
        let up = count_percentile(v, &population, true);
        let down = count_percentile(v, &population, false);
        prop_assert!((up - (100.0 - down)).abs() < 1e-9);
    }
}

// ── 3. Composite bounds ──────────────────────────────────────────────

proptest! {
    #[test]
    fn composite_within_bounds(
        off in arb_percentile(),
        def in arb_percentile(),
        st in arb_percentile(),
        weights in arb_weights(),
    ) {
        let c = composite_score(off, def, st, &weights);
        prop_assert!(c >= -1e-9 && c <= 100.0 + 1e-9, "composite {c} out of range");
    }
}

// ── 4. Dense rank completeness ───────────────────────────────────────

proptest! {
    #[test]
    fn ranks_are_one_through_n(records in arb_records(), weights in arb_weights()) {
        let rows = build_ranking(&records, &weights);
        let expected: usize = records
            .iter()
            .filter(|r| r.offense.is_some() || r.defense.is_some() || r.special_teams.is_some())
            .count();
        prop_assert_eq!(rows.len(), expected);

        let ranks: HashSet<usize> = rows.iter().map(|r| r.rank).collect();
        prop_assert_eq!(ranks.len(), rows.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.rank, i + 1);
        }
        for pair in rows.windows(2) {
            prop_assert!(pair[0].composite_score >= pair[1].composite_score);
        }
    }

    /// Every per-metric dense-rank column is itself a full 1..N ranking.
    #[test]
    fn per_metric_percentiles_are_distinct(records in arb_records()) {
        let pop = Population::new(records);
        for category in MetricCategory::COMPOSITE {
            let mut pct: Vec<f64> = metric_percentiles(
                &pop, category, PercentileMode::DenseRank, TieBreak::TeamName,
            )
            .into_iter()
            .flatten()
            .collect();
            let n = pct.len();
            pct.sort_by(|a, b| a.partial_cmp(b).unwrap());
            pct.dedup();
            prop_assert_eq!(pct.len(), n);
        }
    }

    /// Ranking with the team-name tie-break does not depend on input order.
    #[test]
    fn ranking_independent_of_input_order(records in arb_records()) {
        let weights = CompositeWeights::default();
        let forward = build_ranking(&records, &weights);
        let mut reversed_input = records.clone();
        reversed_input.reverse();
        let backward = build_ranking(&reversed_input, &weights);
        prop_assert_eq!(forward, backward);
    }
}

// ── 5. Neutral fill ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn neutral_fill_equals_median_special_teams(
        off in arb_percentile(),
        def in arb_percentile(),
        weights in arb_weights(),
    ) {
        let missing = ComponentPercentiles {
            offense: Some(off),
            defense: Some(def),
            special_teams: None,
        };
        let median = ComponentPercentiles {
            special_teams: Some(50.0),
            ..missing
        };
        prop_assert!(
            (missing.composite(&weights, NEUTRAL_FILL) - median.composite(&weights, NEUTRAL_FILL))
                .abs()
                < 1e-12
        );
    }
}
