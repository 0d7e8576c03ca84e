use serde::{de, Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

use crate::{
    error::IngestionError,
    model::structures::play::{HitStatistics, RawPlay}
};

/// `get_user` entry. The v1 API encodes every number as a string.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    #[serde(deserialize_with = "from_str")]
    pub user_id: u32,
    pub username: String,
    /// Null for users without ranked plays in the ruleset
    #[serde(default, deserialize_with = "from_optional_str")]
    pub pp_raw: Option<f64>
}

/// `get_user_best` entry
#[derive(Debug, Deserialize)]
pub struct UserBestResponse {
    #[serde(deserialize_with = "from_str")]
    pub beatmap_id: u32,
    #[serde(deserialize_with = "from_str")]
    pub enabled_mods: u32,
    #[serde(rename = "maxcombo", deserialize_with = "from_str")]
    pub max_combo: u32,
    #[serde(rename = "countgeki", deserialize_with = "from_str")]
    pub count_geki: u32,
    #[serde(deserialize_with = "from_str")]
    pub count300: u32,
    #[serde(deserialize_with = "from_str")]
    pub count100: u32,
    #[serde(rename = "countkatu", deserialize_with = "from_str")]
    pub count_katu: u32,
    #[serde(deserialize_with = "from_str")]
    pub count50: u32,
    #[serde(rename = "countmiss", deserialize_with = "from_str")]
    pub count_miss: u32,
    #[serde(default, deserialize_with = "from_optional_str")]
    pub pp: Option<f64>
}

impl TryFrom<UserBestResponse> for RawPlay {
    type Error = IngestionError;

    fn try_from(value: UserBestResponse) -> Result<Self, Self::Error> {
        let live_performance = match value.pp {
            Some(pp) if pp.is_finite() && pp >= 0.0 => pp,
            other => return Err(IngestionError::malformed("pp", format!("{:?}", other)))
        };

        Ok(RawPlay {
            beatmap_id: value.beatmap_id,
            mods: value.enabled_mods,
            statistics: HitStatistics {
                count_geki: value.count_geki,
                count300: value.count300,
                count100: value.count100,
                count_katu: value.count_katu,
                count50: value.count50,
                count_miss: value.count_miss
            },
            max_combo: value.max_combo,
            live_performance
        })
    }
}

fn from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<T>().map_err(de::Error::custom)
}

fn from_optional_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s.trim().parse::<T>().map(Some).map_err(de::Error::custom),
        _ => Ok(None)
    }
}
