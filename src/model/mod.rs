use tracing::debug;

use crate::model::{
    aggregation::{reconcile, weighted_sum},
    comparison::compare_rankings,
    structures::{play::PlayResult, profile::ProfileEvaluation}
};

pub mod aggregation;
pub mod comparison;
pub mod constants;
pub mod structures;

/// # Profile evaluation
///
/// Turns a fully ingested play set into the reconciled totals and the
/// per-play comparison.
///
/// Steps:
/// 1. Weight the live values and the local values independently, each in its
///     own descending order.
/// 2. Infer the bonus from the reference total and the weighted live sum, and
///     add it to the weighted local sum.
/// 3. Compare the live and local orderings play by play.
///
/// This is a pure function of its inputs. Callers must only pass complete
/// play sets; a missing play skews both the sums and the rank shifts.
pub fn evaluate_profile(reference_total: f64, plays: &[PlayResult]) -> ProfileEvaluation {
    let live_values = plays.iter().map(|p| p.live_performance).collect::<Vec<_>>();
    let local_values = plays.iter().map(|p| p.local_performance).collect::<Vec<_>>();

    let totals = reconcile(reference_total, weighted_sum(&live_values), weighted_sum(&local_values));

    debug!(
        "Aggregated {} plays: live {:.2}, local {:.2}, bonus {:.2}",
        plays.len(),
        totals.weighted_live_sum,
        totals.weighted_local_sum,
        totals.bonus
    );

    ProfileEvaluation {
        totals,
        plays: compare_rankings(plays)
    }
}
