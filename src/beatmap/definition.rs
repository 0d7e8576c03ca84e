use std::sync::Arc;

/// Raw `.osu` file contents of one beatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapDefinition {
    pub beatmap_id: u32,
    pub bytes: Arc<[u8]>
}

impl BeatmapDefinition {
    pub fn new(beatmap_id: u32, bytes: impl Into<Arc<[u8]>>) -> Self {
        BeatmapDefinition {
            beatmap_id,
            bytes: bytes.into()
        }
    }

    /// `"{id} - {artist} - {title} ({creator}) [{version}]"`, or just the id
    /// when the metadata can't be read.
    pub fn display_name(&self) -> String {
        match rosu_map::Beatmap::from_bytes(&self.bytes) {
            Ok(map) if !map.title.is_empty() => format!(
                "{} - {} - {} ({}) [{}]",
                self.beatmap_id, map.artist, map.title, map.creator, map.version
            ),
            _ => self.beatmap_id.to_string()
        }
    }
}
