use serde::Serialize;

/// Judgement counts of a single play, in the legacy layout shared by the
/// API and the scores tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HitStatistics {
    pub count_geki: u32,
    pub count300: u32,
    pub count100: u32,
    pub count_katu: u32,
    pub count50: u32,
    pub count_miss: u32
}

/// A validated play as produced by a play source. Everything here has been
/// checked at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPlay {
    pub beatmap_id: u32,
    /// Legacy mod bits
    pub mods: u32,
    pub statistics: HitStatistics,
    pub max_combo: u32,
    pub live_performance: f64
}

/// One evaluated play. Both performance values are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayResult {
    pub beatmap_id: u32,
    pub beatmap_title: String,
    pub mods: String,
    pub live_performance: f64,
    pub local_performance: f64
}
