use serde_repr::{Deserialize_repr, Serialize_repr};
use std::{convert::TryFrom, fmt};
use strum_macros::EnumIter;

/// Legacy ruleset ids as used by the osu! API v1 `m` parameter.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum Ruleset {
    Osu = 0,
    Taiko = 1,
    Catch = 2,
    Mania = 3
}

impl Ruleset {
    /// Table holding the user's best scores for this ruleset
    pub fn scores_table(&self) -> &'static str {
        match self {
            Ruleset::Osu => "osu_scores_high",
            Ruleset::Taiko => "osu_scores_taiko_high",
            Ruleset::Catch => "osu_scores_fruits_high",
            Ruleset::Mania => "osu_scores_mania_high"
        }
    }
}

impl TryFrom<i32> for Ruleset {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Ruleset::Osu),
            1 => Ok(Ruleset::Taiko),
            2 => Ok(Ruleset::Catch),
            3 => Ok(Ruleset::Mania),
            _ => Err(())
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ruleset::Osu => "osu!",
            Ruleset::Taiko => "osu!taiko",
            Ruleset::Catch => "osu!catch",
            Ruleset::Mania => "osu!mania"
        };

        write!(f, "{}", name)
    }
}
