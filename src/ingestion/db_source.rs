use crate::{
    api::OsuApiClient,
    database::{db::DbClient, db_structs::ScoreRow},
    error::IngestionError,
    ingestion::{fetch_profile_from_api, PlaySource},
    model::structures::{play::RawPlay, profile::Profile, ruleset::Ruleset}
};

/// Reads top plays straight from the scores tables. The profile total still
/// comes from the API.
#[derive(Clone)]
pub struct DatabaseSource {
    api: OsuApiClient,
    db: DbClient
}

impl DatabaseSource {
    pub fn new(api: OsuApiClient, db: DbClient) -> Self {
        DatabaseSource { api, db }
    }
}

/// Converts every row, failing on the first malformed one.
pub fn plays_from_rows(rows: Vec<ScoreRow>) -> Result<Vec<RawPlay>, IngestionError> {
    rows.into_iter().map(RawPlay::try_from).collect()
}

impl PlaySource for DatabaseSource {
    async fn fetch_profile(&self, user: &str, ruleset: Ruleset) -> Result<Profile, IngestionError> {
        fetch_profile_from_api(&self.api, user, ruleset).await
    }

    /// The scores tables hold the full ranked set, so `limit` only applies to
    /// the API.
    async fn fetch_top_plays(&self, user_id: u32, ruleset: Ruleset, _limit: u32) -> Result<Vec<RawPlay>, IngestionError> {
        plays_from_rows(self.db.get_scores(user_id, ruleset).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(beatmap_id: i32, pp: f64) -> ScoreRow {
        ScoreRow {
            score_id: i64::from(beatmap_id) * 10,
            beatmap_id,
            enabled_mods: 0,
            max_combo: 500,
            count_geki: 0,
            count300: 300,
            count100: 0,
            count_katu: 0,
            count50: 0,
            count_miss: 0,
            pp
        }
    }

    #[test]
    fn test_plays_from_rows_keeps_order() {
        let plays = plays_from_rows(vec![row(3, 150.0), row(1, 300.0), row(2, 150.0)]).unwrap();

        assert_eq!(plays.iter().map(|p| p.beatmap_id).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(plays[1].live_performance, 300.0);
    }

    #[test]
    fn test_plays_from_rows_malformed_row_fails_all() {
        let mut bad = row(2, 120.0);
        bad.count_miss = -1;

        let result = plays_from_rows(vec![row(1, 200.0), bad, row(3, 100.0)]);

        assert!(matches!(
            result,
            Err(IngestionError::MalformedRecord { field: "countmiss", .. })
        ));
    }

    #[test]
    fn test_plays_from_rows_empty() {
        assert!(plays_from_rows(Vec::new()).unwrap().is_empty());
    }
}
