pub mod api_structs;

use reqwest::{Client, ClientBuilder};
use tracing::{debug, info};

use crate::{
    api::api_structs::{UserBestResponse, UserResponse},
    error::IngestionError,
    model::structures::ruleset::Ruleset
};

/// Client for the osu! API v1 and the beatmap file endpoint.
///
/// The API key travels in the query string, so request URLs are never logged.
#[derive(Clone)]
pub struct OsuApiClient {
    client: Client,
    api_root: String,
    api_key: String
}

impl OsuApiClient {
    pub fn new(api_root: &str, api_key: &str) -> Result<Self, IngestionError> {
        let client = ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(OsuApiClient {
            client,
            api_root: api_root.trim_end_matches('/').to_string(),
            api_key: api_key.to_string()
        })
    }

    /// Fetches the profile of `user` (id or username). An empty response
    /// means the user doesn't exist.
    pub async fn get_user(&self, user: &str, ruleset: Ruleset) -> Result<UserResponse, IngestionError> {
        info!("Getting user data...");

        let mode = (ruleset as u8).to_string();
        let users: Vec<UserResponse> = self
            .client
            .get(format!("{}/api/get_user", self.api_root))
            .query(&[("k", self.api_key.as_str()), ("u", user), ("m", mode.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        users
            .into_iter()
            .next()
            .ok_or_else(|| IngestionError::UserNotFound(user.to_string()))
    }

    pub async fn get_user_best(
        &self,
        user_id: u32,
        ruleset: Ruleset,
        limit: u32
    ) -> Result<Vec<UserBestResponse>, IngestionError> {
        info!("Getting user top scores...");

        let user = user_id.to_string();
        let mode = (ruleset as u8).to_string();
        let limit = limit.to_string();
        let plays: Vec<UserBestResponse> = self
            .client
            .get(format!("{}/api/get_user_best", self.api_root))
            .query(&[
                ("k", self.api_key.as_str()),
                ("u", user.as_str()),
                ("m", mode.as_str()),
                ("type", "id"),
                ("limit", limit.as_str())
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Received {} top scores", plays.len());
        Ok(plays)
    }

    /// Downloads the `.osu` file of a beatmap. The endpoint answers with an
    /// empty body for unknown beatmaps.
    pub async fn download_beatmap(&self, beatmap_id: u32) -> Result<Vec<u8>, IngestionError> {
        info!("Downloading {}.osu...", beatmap_id);

        let bytes = self
            .client
            .get(format!("{}/osu/{}", self.api_root, beatmap_id))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        if bytes.is_empty() {
            return Err(IngestionError::BeatmapUnavailable(beatmap_id));
        }

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root_trailing_slash_is_trimmed() {
        let client = OsuApiClient::new("https://osu.ppy.sh/", "key").unwrap();
        assert_eq!(client.api_root, "https://osu.ppy.sh");
    }
}
