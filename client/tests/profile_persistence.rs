//! Profile persistence across process restarts
//!
//! A restart is modeled as a fresh ProfileStore over the same session
//! directory.

use std::sync::Arc;

use tempfile::TempDir;

use client::{ClientError, FileSessionStorage, PROFILE_SLOT, ProfileStore};
use shared::{Sex, UserProfile};

fn storage_for(dir: &TempDir) -> Arc<FileSessionStorage> {
    Arc::new(FileSessionStorage::new(dir.path().to_path_buf()))
}

fn sample_profile() -> UserProfile {
    UserProfile {
        age: 25,
        sex: Sex::Male,
        is_privacy_agreed: true,
    }
}

#[tokio::test]
async fn test_profile_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = ProfileStore::new(storage_for(&dir));
    first.set(sample_profile()).await.unwrap();
    drop(first);

    let mut second = ProfileStore::new(storage_for(&dir));
    let restored = second.load().await.unwrap();

    assert_eq!(restored, Some(sample_profile()));
    assert!(second.is_complete());
}

#[tokio::test]
async fn test_cleared_profile_stays_absent_after_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = ProfileStore::new(storage_for(&dir));
    first.set(sample_profile()).await.unwrap();
    first.clear().await.unwrap();
    drop(first);

    let mut second = ProfileStore::new(storage_for(&dir));
    assert_eq!(second.load().await.unwrap(), None);
    assert!(second.get().is_none());
}

#[tokio::test]
async fn test_corrupted_slot_loads_as_parse_error_not_panic() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{PROFILE_SLOT}.json")), "{broken").unwrap();

    let mut store = ProfileStore::new(storage_for(&dir));
    let result = store.load().await;

    assert!(matches!(result, Err(ClientError::StorageParse { .. })));
    assert!(store.get().is_none());
    assert!(!store.is_complete());
}

#[tokio::test]
async fn test_restart_reflects_latest_set() {
    let dir = TempDir::new().unwrap();

    let mut first = ProfileStore::new(storage_for(&dir));
    first.set(sample_profile()).await.unwrap();
    first
        .set(UserProfile {
            age: 31,
            sex: Sex::Female,
            is_privacy_agreed: true,
        })
        .await
        .unwrap();
    drop(first);

    let mut second = ProfileStore::new(storage_for(&dir));
    let restored = second.load().await.unwrap().unwrap();
    assert_eq!(restored.age, 31);
    assert_eq!(restored.sex, Sex::Female);
}
