use serde::Serialize;

use crate::model::structures::ruleset::Ruleset;

/// Reconciled summary for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileTotals {
    /// Total reported by the server
    pub reference_total: f64,
    pub weighted_local_sum: f64,
    pub weighted_live_sum: f64,
    /// Part of the reference total not explained by the tracked plays.
    /// May be negative.
    pub bonus: f64,
    pub adjusted_local_total: f64,
    pub delta: f64
}

/// Per-play comparison row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayReport {
    pub beatmap_id: u32,
    pub beatmap_title: String,
    pub mods: String,
    pub live_performance: f64,
    pub local_performance: f64,
    /// local - live
    pub performance_delta: f64,
    /// 0-based position in the live ordering
    pub live_rank: usize,
    /// 0-based position in the local ordering
    pub local_rank: usize,
    /// Weight applied to this play in the local weighted sum
    pub local_weight: f64,
    /// live_rank - local_rank
    pub rank_shift: i64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEvaluation {
    pub totals: ProfileTotals,
    /// Ordered by local performance, best first
    pub plays: Vec<PlayReport>
}

/// Player identity and server-reported total, as returned by a play source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub user_id: u32,
    pub username: String,
    pub reference_total: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub profile: Profile,
    pub ruleset: Ruleset,
    pub evaluation: ProfileEvaluation
}
