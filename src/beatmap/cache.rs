use std::{
    collections::HashMap,
    future::Future,
    io,
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        RwLock
    }
};

use tracing::debug;

use crate::{api::OsuApiClient, beatmap::definition::BeatmapDefinition, error::IngestionError};

/// Storage backend for beatmap files, keyed by beatmap id. Entries are
/// written once and never invalidated.
pub trait BeatmapStore: Send + Sync {
    fn load(&self, beatmap_id: u32) -> impl Future<Output = io::Result<Option<Vec<u8>>>> + Send;

    fn save(&self, beatmap_id: u32, bytes: &[u8]) -> impl Future<Output = io::Result<()>> + Send;
}

/// Source of beatmap files on a cache miss.
pub trait BeatmapFetcher: Send + Sync {
    fn fetch(&self, beatmap_id: u32) -> impl Future<Output = Result<Vec<u8>, IngestionError>> + Send;
}

impl BeatmapFetcher for OsuApiClient {
    async fn fetch(&self, beatmap_id: u32) -> Result<Vec<u8>, IngestionError> {
        self.download_beatmap(beatmap_id).await
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<u32, Vec<u8>>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "beatmap store lock poisoned")
}

impl BeatmapStore for MemoryStore {
    async fn load(&self, beatmap_id: u32) -> io::Result<Option<Vec<u8>>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(&beatmap_id).cloned())
    }

    async fn save(&self, beatmap_id: u32, bytes: &[u8]) -> io::Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(beatmap_id, bytes.to_vec());
        Ok(())
    }
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stores each beatmap as `{dir}/{id}.osu`.
///
/// Files are written to a temporary name and renamed into place, so readers
/// never see a partial file. Two tasks populating the same id race harmlessly.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path(&self, beatmap_id: u32) -> PathBuf {
        self.dir.join(format!("{}.osu", beatmap_id))
    }
}

impl BeatmapStore for FileStore {
    async fn load(&self, beatmap_id: u32) -> io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path(beatmap_id)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
        }
    }

    async fn save(&self, beatmap_id: u32, bytes: &[u8]) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let temp = self.dir.join(format!(
            "{}.osu.{}-{}.part",
            beatmap_id,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, self.path(beatmap_id)).await
    }
}

/// Read-through cache: beatmaps are loaded from the store and fetched (then
/// stored) on a miss.
pub struct BeatmapCache<S, F> {
    store: S,
    fetcher: F
}

impl<S: BeatmapStore, F: BeatmapFetcher> BeatmapCache<S, F> {
    pub fn new(store: S, fetcher: F) -> Self {
        BeatmapCache { store, fetcher }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn resolve(&self, beatmap_id: u32) -> Result<BeatmapDefinition, IngestionError> {
        if let Some(bytes) = self.store.load(beatmap_id).await? {
            debug!("Beatmap {} found in cache", beatmap_id);
            return Ok(BeatmapDefinition::new(beatmap_id, bytes));
        }

        let bytes = self.fetcher.fetch(beatmap_id).await?;
        if bytes.is_empty() {
            return Err(IngestionError::BeatmapUnavailable(beatmap_id));
        }

        self.store.save(beatmap_id, &bytes).await?;

        Ok(BeatmapDefinition::new(beatmap_id, bytes))
    }
}
