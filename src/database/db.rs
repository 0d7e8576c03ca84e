use super::db_structs::ScoreRow;
use crate::{
    error::IngestionError,
    model::{constants::BLACKLISTED_BEATMAPS, structures::ruleset::Ruleset}
};
use std::sync::Arc;
use tokio_postgres::{types::ToSql, Client, NoTls};
use tracing::{error, info};

#[derive(Clone)]
pub struct DbClient {
    client: Arc<Client>
}

/// Statement and bound parameters for reading one user's scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreQuery {
    pub sql: String,
    pub user_id: i64,
    pub excluded_beatmaps: Vec<i32>
}

impl ScoreQuery {
    /// Every scored play of `user_id` in the ruleset's table, best first.
    ///
    /// Scores without pp are not ranked and are not part of the tracked set;
    /// blacklisted beatmaps are excluded as well.
    pub fn new(user_id: u32, ruleset: Ruleset) -> Self {
        let sql = format!(
            "SELECT score_id::int8 AS score_id, beatmap_id::int4 AS beatmap_id, \
            enabled_mods::int4 AS enabled_mods, maxcombo::int4 AS maxcombo, \
            countgeki::int4 AS countgeki, count300::int4 AS count300, count100::int4 AS count100, \
            countkatu::int4 AS countkatu, count50::int4 AS count50, countmiss::int4 AS countmiss, \
            pp::float8 AS pp \
            FROM {} \
            WHERE user_id::int8 = $1 AND pp IS NOT NULL AND NOT (beatmap_id::int4 = ANY($2)) \
            ORDER BY pp DESC, score_id",
            ruleset.scores_table()
        );

        ScoreQuery {
            sql,
            user_id: i64::from(user_id),
            excluded_beatmaps: BLACKLISTED_BEATMAPS.to_vec()
        }
    }

    pub fn params(&self) -> [&(dyn ToSql + Sync); 2] {
        [&self.user_id, &self.excluded_beatmaps]
    }
}

impl DbClient {
    // Connect to the database and return a DbClient instance
    pub async fn connect(connection_str: &str) -> Result<Self, IngestionError> {
        let (client, connection) = tokio_postgres::connect(connection_str, NoTls).await?;

        // Spawn the connection object to run in the background
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {}", e);
            }
        });

        Ok(DbClient {
            client: Arc::new(client)
        })
    }

    /// Fetches all of the user's scores for the ruleset, best first. Any row
    /// that can't be read fails the whole fetch.
    pub async fn get_scores(&self, user_id: u32, ruleset: Ruleset) -> Result<Vec<ScoreRow>, IngestionError> {
        let query = ScoreQuery::new(user_id, ruleset);

        info!("Fetching scores from {}...", ruleset.scores_table());
        info!("Excluding blacklisted beatmaps: {:?}", query.excluded_beatmaps);

        let rows = self.client.query(query.sql.as_str(), &query.params()).await?;

        info!("Fetched {} scores", rows.len());
        rows.iter().map(ScoreRow::from_row).collect()
    }
}
