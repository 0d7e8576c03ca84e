#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Once
    },
    time::Duration
};

use pp_profile::{
    beatmap::{BeatmapDefinition, BeatmapFetcher},
    error::{IngestionError, PlayEvaluationError},
    ingestion::PlaySource,
    model::structures::{play::RawPlay, profile::Profile, ruleset::Ruleset},
    performance::PerformanceEvaluator,
    utils::test_utils::beatmap_file
};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

/// Play source backed by fixed data
pub struct StaticSource {
    pub profile: Option<Profile>,
    pub plays: Vec<RawPlay>
}

impl StaticSource {
    pub fn new(reference_total: f64, plays: Vec<RawPlay>) -> Self {
        StaticSource {
            profile: Some(Profile {
                user_id: 124493,
                username: "Cookiezi".to_string(),
                reference_total
            }),
            plays
        }
    }
}

impl PlaySource for StaticSource {
    async fn fetch_profile(&self, user: &str, _ruleset: Ruleset) -> Result<Profile, IngestionError> {
        self.profile
            .clone()
            .ok_or_else(|| IngestionError::UserNotFound(user.to_string()))
    }

    async fn fetch_top_plays(&self, _user_id: u32, _ruleset: Ruleset, limit: u32) -> Result<Vec<RawPlay>, IngestionError> {
        Ok(self.plays.iter().take(limit as usize).cloned().collect())
    }
}

/// Serves generated `.osu` files, with a per-beatmap delay so that
/// completions arrive out of order.
#[derive(Default)]
pub struct FakeFetcher {
    pub missing: HashSet<u32>,
    pub calls: AtomicUsize
}

impl FakeFetcher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BeatmapFetcher for FakeFetcher {
    async fn fetch(&self, beatmap_id: u32) -> Result<Vec<u8>, IngestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(u64::from(50 - beatmap_id % 50))).await;

        if self.missing.contains(&beatmap_id) {
            return Ok(Vec::new());
        }

        Ok(beatmap_file(
            "Artist",
            &format!("Song {}", beatmap_id),
            "Mapper",
            "Insane"
        ))
    }
}

/// Returns a fixed local value per beatmap
#[derive(Default)]
pub struct FixedEvaluator {
    pub values: HashMap<u32, f64>
}

impl FixedEvaluator {
    pub fn new(values: &[(u32, f64)]) -> Self {
        FixedEvaluator {
            values: values.iter().copied().collect()
        }
    }
}

impl PerformanceEvaluator for FixedEvaluator {
    fn evaluate(&self, beatmap: &BeatmapDefinition, _play: &RawPlay, _ruleset: Ruleset) -> Result<f64, PlayEvaluationError> {
        self.values
            .get(&beatmap.beatmap_id)
            .copied()
            .ok_or_else(|| PlayEvaluationError {
                beatmap_id: beatmap.beatmap_id,
                reason: "no value configured".to_string()
            })
    }
}
