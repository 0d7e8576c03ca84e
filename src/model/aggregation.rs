use crate::model::{constants::PERFORMANCE_DECAY, structures::profile::ProfileTotals};
use std::cmp::Ordering;

/// Weight of the play at `rank` (0-based) in a descending ordering.
pub fn weight(rank: usize) -> f64 {
    PERFORMANCE_DECAY.powi(rank as i32)
}

/// Indices of `values` ordered best first.
///
/// The sort is stable: equal values keep their input order. Both the
/// weighted sums and the rank comparison use this ordering so that a play's
/// reported rank always matches the weight it received.
pub fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal));

    indices
}

/// Sum of `values` sorted descending, each weighted by `0.95^rank`.
/// An empty input sums to 0.
pub fn weighted_sum(values: &[f64]) -> f64 {
    descending_order(values)
        .into_iter()
        .enumerate()
        .map(|(rank, i)| weight(rank) * values[i])
        .sum()
}

/// Folds the part of the reference total that the tracked live plays don't
/// explain (the bonus) into the local estimate.
///
/// The bonus is not clamped. A negative bonus is a known limitation of the
/// method and is reported as is.
pub fn reconcile(reference_total: f64, weighted_live_sum: f64, weighted_local_sum: f64) -> ProfileTotals {
    let bonus = reference_total - weighted_live_sum;
    let adjusted_local_total = weighted_local_sum + bonus;

    ProfileTotals {
        reference_total,
        weighted_local_sum,
        weighted_live_sum,
        bonus,
        adjusted_local_total,
        delta: adjusted_local_total - reference_total
    }
}
