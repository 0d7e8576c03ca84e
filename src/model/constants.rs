// Aggregation constants
pub const PERFORMANCE_DECAY: f64 = 0.95;

// Ingestion defaults
pub const DEFAULT_PLAY_LIMIT: u32 = 100;
pub const MAX_PLAY_LIMIT: u32 = 100;
pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_API_ROOT: &str = "https://osu.ppy.sh";

/// Beatmaps excluded from the database source
pub const BLACKLISTED_BEATMAPS: [i32; 1] = [1257904];
