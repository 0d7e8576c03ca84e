pub mod rosu;

pub use rosu::RosuEvaluator;

use crate::{
    beatmap::BeatmapDefinition,
    error::PlayEvaluationError,
    model::structures::{play::RawPlay, ruleset::Ruleset}
};

/// Computes the local performance value of a single play.
///
/// Implementations are called from blocking worker threads and must be
/// shareable across them.
pub trait PerformanceEvaluator: Send + Sync + 'static {
    fn evaluate(
        &self,
        beatmap: &BeatmapDefinition,
        play: &RawPlay,
        ruleset: Ruleset
    ) -> Result<f64, PlayEvaluationError>;
}
