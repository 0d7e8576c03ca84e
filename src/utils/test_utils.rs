use crate::model::structures::play::{HitStatistics, PlayResult, RawPlay};

pub fn play(beatmap_id: u32, live_performance: f64, local_performance: f64) -> PlayResult {
    PlayResult {
        beatmap_id,
        beatmap_title: beatmap_id.to_string(),
        mods: "None".to_string(),
        live_performance,
        local_performance
    }
}

pub fn raw_play(beatmap_id: u32, mods: u32, live_performance: f64) -> RawPlay {
    RawPlay {
        beatmap_id,
        mods,
        statistics: HitStatistics {
            count_geki: 0,
            count300: 500,
            count100: 10,
            count_katu: 0,
            count50: 1,
            count_miss: 0
        },
        max_combo: 700,
        live_performance
    }
}

/// Deterministic play set with live and local values that disagree for
/// roughly a third of the plays.
pub fn generate_plays(n: usize) -> Vec<PlayResult> {
    (0..n)
        .map(|i| {
            let live = 500.0 - (i as f64 * 3.7) % 480.0;
            let local = if i % 3 == 0 { live * 1.12 } else { live - (i % 7) as f64 };
            play(i as u32 + 1, live, local.max(0.0))
        })
        .collect()
}

/// Minimal `.osu` file contents carrying only the metadata section
pub fn beatmap_file(artist: &str, title: &str, creator: &str, version: &str) -> Vec<u8> {
    format!(
        "osu file format v14\n\n[Metadata]\nTitle:{}\nArtist:{}\nCreator:{}\nVersion:{}\n",
        title, artist, creator, version
    )
    .into_bytes()
}
