use crate::{
    api::{api_structs::UserBestResponse, OsuApiClient},
    error::IngestionError,
    ingestion::{fetch_profile_from_api, PlaySource},
    model::structures::{play::RawPlay, profile::Profile, ruleset::Ruleset}
};

/// Reads top plays from `get_user_best`.
#[derive(Clone)]
pub struct ApiSource {
    client: OsuApiClient
}

impl ApiSource {
    pub fn new(client: OsuApiClient) -> Self {
        ApiSource { client }
    }
}

/// Converts every `get_user_best` entry, failing on the first malformed one.
pub fn plays_from_responses(responses: Vec<UserBestResponse>) -> Result<Vec<RawPlay>, IngestionError> {
    responses.into_iter().map(RawPlay::try_from).collect()
}

impl PlaySource for ApiSource {
    async fn fetch_profile(&self, user: &str, ruleset: Ruleset) -> Result<Profile, IngestionError> {
        fetch_profile_from_api(&self.client, user, ruleset).await
    }

    async fn fetch_top_plays(&self, user_id: u32, ruleset: Ruleset, limit: u32) -> Result<Vec<RawPlay>, IngestionError> {
        plays_from_responses(self.client.get_user_best(user_id, ruleset, limit).await?)
    }
}
