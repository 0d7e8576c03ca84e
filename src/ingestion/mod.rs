//! Ingestion boundary: gathers a complete, validated play set for one profile
//! before anything is aggregated.

pub mod api_source;
pub mod db_source;

pub use api_source::ApiSource;
pub use db_source::DatabaseSource;

use std::{future::Future, sync::Arc};

use futures::{stream, StreamExt, TryStreamExt};
use tracing::{info, Instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    api::OsuApiClient,
    beatmap::{BeatmapCache, BeatmapDefinition, BeatmapFetcher, BeatmapStore},
    error::{IngestionError, PlayEvaluationError, ProfileError},
    model::{
        evaluate_profile,
        structures::{
            legacy_mods,
            play::{PlayResult, RawPlay},
            profile::{Profile, ProfileReport},
            ruleset::Ruleset
        }
    },
    performance::PerformanceEvaluator,
    utils::progress_utils::progress_span
};

/// A provider of profiles and their top plays. The API and the database are
/// interchangeable implementations.
pub trait PlaySource: Send + Sync {
    fn fetch_profile(&self, user: &str, ruleset: Ruleset) -> impl Future<Output = Result<Profile, IngestionError>> + Send;

    fn fetch_top_plays(
        &self,
        user_id: u32,
        ruleset: Ruleset,
        limit: u32
    ) -> impl Future<Output = Result<Vec<RawPlay>, IngestionError>> + Send;
}

#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    pub ruleset: Ruleset,
    pub limit: u32,
    pub concurrency: usize
}

/// Fetches the profile of `user` through the API. Shared by both sources
/// since the scores tables carry no profile totals.
pub(crate) async fn fetch_profile_from_api(
    client: &OsuApiClient,
    user: &str,
    ruleset: Ruleset
) -> Result<Profile, IngestionError> {
    let response = client.get_user(user, ruleset).await?;

    // Users without ranked plays report no total
    let reference_total = response.pp_raw.unwrap_or(0.0);
    if !reference_total.is_finite() || reference_total < 0.0 {
        return Err(IngestionError::malformed("pp_raw", reference_total));
    }

    Ok(Profile {
        user_id: response.user_id,
        username: response.username,
        reference_total
    })
}

/// Fetches, evaluates and aggregates the plays of one profile.
///
/// Aggregation only starts once every play has both its live and local value;
/// the first failure aborts the whole evaluation.
pub async fn evaluate_user<P, S, F, E>(
    source: &P,
    cache: &BeatmapCache<S, F>,
    evaluator: Arc<E>,
    user: &str,
    options: IngestOptions
) -> Result<ProfileReport, ProfileError>
where
    P: PlaySource,
    S: BeatmapStore,
    F: BeatmapFetcher,
    E: PerformanceEvaluator
{
    let profile = source.fetch_profile(user, options.ruleset).await?;
    info!("Evaluating {} ({}) in {}", profile.username, profile.user_id, options.ruleset);

    let raw_plays = source
        .fetch_top_plays(profile.user_id, options.ruleset, options.limit)
        .await?;
    info!("Fetched {} plays", raw_plays.len());

    let plays = resolve_plays(raw_plays, cache, evaluator, options.ruleset, options.concurrency).await?;
    let evaluation = evaluate_profile(profile.reference_total, &plays);

    Ok(ProfileReport {
        profile,
        ruleset: options.ruleset,
        evaluation
    })
}

/// Resolves beatmaps and evaluates plays with at most `concurrency` in
/// flight. Results keep the ingestion order.
pub async fn resolve_plays<S, F, E>(
    raw_plays: Vec<RawPlay>,
    cache: &BeatmapCache<S, F>,
    evaluator: Arc<E>,
    ruleset: Ruleset,
    concurrency: usize
) -> Result<Vec<PlayResult>, ProfileError>
where
    S: BeatmapStore,
    F: BeatmapFetcher,
    E: PerformanceEvaluator
{
    let span = progress_span(raw_plays.len() as u64, "Evaluating plays");

    stream::iter(raw_plays)
        .map(|play| {
            let evaluator = Arc::clone(&evaluator);
            let span = span.clone();

            async move {
                let beatmap = cache.resolve(play.beatmap_id).await?;
                let result = evaluate_play(evaluator, beatmap, play, ruleset).await?;
                span.pb_inc(1);

                Ok::<_, ProfileError>(result)
            }
        })
        .buffered(concurrency.max(1))
        .try_collect::<Vec<_>>()
        .instrument(span.clone())
        .await
}

async fn evaluate_play<E: PerformanceEvaluator>(
    evaluator: Arc<E>,
    beatmap: BeatmapDefinition,
    play: RawPlay,
    ruleset: Ruleset
) -> Result<PlayResult, ProfileError> {
    let result = tokio::task::spawn_blocking(move || {
        let local_performance = evaluator.evaluate(&beatmap, &play, ruleset)?;

        Ok::<_, PlayEvaluationError>(PlayResult {
            beatmap_id: play.beatmap_id,
            beatmap_title: beatmap.display_name(),
            mods: legacy_mods::summary(play.mods),
            live_performance: play.live_performance,
            local_performance
        })
    })
    .await
    .map_err(|e| IngestionError::Join(e.to_string()))?;

    Ok(result?)
}
