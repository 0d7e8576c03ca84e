mod common;

use common::{init_test_env, FakeFetcher};
use pp_profile::beatmap::{BeatmapCache, BeatmapStore, FileStore};

#[tokio::test]
async fn test_load_missing_returns_none() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    assert_eq!(store.load(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_save_then_load() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("cache"));

    store.save(42, b"osu file format v14").await.unwrap();

    assert_eq!(store.load(42).await.unwrap(), Some(b"osu file format v14".to_vec()));
    assert!(store.path(42).ends_with("42.osu"));
    assert!(store.path(42).exists());
}

#[tokio::test]
async fn test_no_partial_files_left_behind() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let (a, b) = tokio::join!(store.save(7, b"same contents"), store.save(7, b"same contents"));
    a.unwrap();
    b.unwrap();

    let names = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["7.osu".to_string()]);
}

#[tokio::test]
async fn test_cache_downloads_once_to_disk() {
    init_test_env();
    let dir = tempfile::tempdir().unwrap();
    let cache = BeatmapCache::new(FileStore::new(dir.path()), FakeFetcher::default());

    let first = cache.resolve(12).await.unwrap();
    let second = cache.resolve(12).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.fetcher().calls(), 1);
    assert!(dir.path().join("12.osu").exists());

    // A fresh cache over the same directory reuses the file
    let reopened = BeatmapCache::new(FileStore::new(dir.path()), FakeFetcher::default());
    let third = reopened.resolve(12).await.unwrap();
    assert_eq!(reopened.fetcher().calls(), 0);
    assert_eq!(third.display_name(), "12 - Artist - Song 12 (Mapper) [Insane]");
}
