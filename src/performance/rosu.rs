use rosu_pp::{model::mode::GameMode, Beatmap, Performance};

use crate::{
    beatmap::BeatmapDefinition,
    error::PlayEvaluationError,
    model::structures::{play::RawPlay, ruleset::Ruleset},
    performance::PerformanceEvaluator
};

/// Evaluates plays with `rosu-pp`, converting the beatmap to the requested
/// ruleset where a conversion exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosuEvaluator;

impl RosuEvaluator {
    pub fn new() -> Self {
        RosuEvaluator
    }
}

fn game_mode(ruleset: Ruleset) -> GameMode {
    match ruleset {
        Ruleset::Osu => GameMode::Osu,
        Ruleset::Taiko => GameMode::Taiko,
        Ruleset::Catch => GameMode::Catch,
        Ruleset::Mania => GameMode::Mania
    }
}

impl PerformanceEvaluator for RosuEvaluator {
    fn evaluate(
        &self,
        beatmap: &BeatmapDefinition,
        play: &RawPlay,
        ruleset: Ruleset
    ) -> Result<f64, PlayEvaluationError> {
        let map = Beatmap::from_bytes(&beatmap.bytes).map_err(|e| PlayEvaluationError {
            beatmap_id: beatmap.beatmap_id,
            reason: e.to_string()
        })?;

        let stats = &play.statistics;
        let pp = Performance::new(&map)
            .mode_or_ignore(game_mode(ruleset))
            .mods(play.mods)
            .combo(play.max_combo)
            .n_geki(stats.count_geki)
            .n300(stats.count300)
            .n100(stats.count100)
            .n_katu(stats.count_katu)
            .n50(stats.count50)
            .misses(stats.count_miss)
            .calculate()
            .pp();

        if !pp.is_finite() || pp < 0.0 {
            return Err(PlayEvaluationError {
                beatmap_id: beatmap.beatmap_id,
                reason: format!("performance engine returned {}", pp)
            });
        }

        Ok(pp)
    }
}
