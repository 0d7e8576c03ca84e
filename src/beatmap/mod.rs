pub mod cache;
pub mod definition;

pub use cache::{BeatmapCache, BeatmapFetcher, BeatmapStore, FileStore, MemoryStore};
pub use definition::BeatmapDefinition;
