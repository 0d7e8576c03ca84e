use tokio_postgres::Row;

use crate::{
    error::IngestionError,
    model::structures::play::{HitStatistics, RawPlay}
};

/// A row of one of the `osu_scores*_high` tables, cast to int4/float8 by the
/// query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub score_id: i64,
    pub beatmap_id: i32,
    pub enabled_mods: i32,
    pub max_combo: i32,
    pub count_geki: i32,
    pub count300: i32,
    pub count100: i32,
    pub count_katu: i32,
    pub count50: i32,
    pub count_miss: i32,
    pub pp: f64
}

impl ScoreRow {
    pub fn from_row(row: &Row) -> Result<Self, IngestionError> {
        Ok(ScoreRow {
            score_id: row.try_get("score_id")?,
            beatmap_id: row.try_get("beatmap_id")?,
            enabled_mods: row.try_get("enabled_mods")?,
            max_combo: row.try_get("maxcombo")?,
            count_geki: row.try_get("countgeki")?,
            count300: row.try_get("count300")?,
            count100: row.try_get("count100")?,
            count_katu: row.try_get("countkatu")?,
            count50: row.try_get("count50")?,
            count_miss: row.try_get("countmiss")?,
            pp: row.try_get("pp")?
        })
    }
}

fn unsigned(field: &'static str, value: i32) -> Result<u32, IngestionError> {
    u32::try_from(value).map_err(|_| IngestionError::malformed(field, value))
}

impl TryFrom<ScoreRow> for RawPlay {
    type Error = IngestionError;

    fn try_from(row: ScoreRow) -> Result<Self, Self::Error> {
        if !row.pp.is_finite() || row.pp < 0.0 {
            return Err(IngestionError::malformed("pp", row.pp));
        }

        Ok(RawPlay {
            beatmap_id: unsigned("beatmap_id", row.beatmap_id)?,
            // Mods are a bit set; reinterpret rather than range-check
            mods: row.enabled_mods as u32,
            statistics: HitStatistics {
                count_geki: unsigned("countgeki", row.count_geki)?,
                count300: unsigned("count300", row.count300)?,
                count100: unsigned("count100", row.count100)?,
                count_katu: unsigned("countkatu", row.count_katu)?,
                count50: unsigned("count50", row.count50)?,
                count_miss: unsigned("countmiss", row.count_miss)?
            },
            max_combo: unsigned("maxcombo", row.max_combo)?,
            live_performance: row.pp
        })
    }
}
