//! Integration tests for the songs vertical slice
//!
//! Covers keyed CRUD, the unique path constraint, and the play-counter
//! column staying out of reach of metadata updates.


use chime_core::SongTags;
use chime_storage::{songs, StorageError};
use test_helpers::TestDb;

fn sample_tags() -> SongTags {
    SongTags {
        title: Some("Song A".to_string()),
        artist: Some("Band".to_string()),
        album: None,
        year: Some(2001),
        duration: Some(245),
    }
}

#[tokio::test]
async fn create_and_find_by_path() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    let created = songs::create(&mut conn, "rock/track1.mp3", &sample_tags())
        .await
        .expect("Failed to create song");

    assert_eq!(created.path, "rock/track1.mp3");
    assert_eq!(created.play_count, 0);

    let found = songs::find_by_path(&mut conn, "rock/track1.mp3")
        .await
        .unwrap()
        .expect("song should exist");

    assert_eq!(found.id, created.id);
    assert_eq!(found.title.as_deref(), Some("Song A"));
    assert_eq!(found.year, Some(2001));
    assert_eq!(found.duration, Some(245));
    assert_eq!(found.play_count, 0);
}

#[tokio::test]
async fn find_by_path_returns_none_for_unknown() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    let found = songs::find_by_path(&mut conn, "missing.mp3").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn duplicate_path_is_rejected() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    songs::create(&mut conn, "a.mp3", &sample_tags())
        .await
        .unwrap();

    let err = songs::create(&mut conn, "a.mp3", &SongTags::default())
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Duplicate(p) if p == "a.mp3"));
}

#[tokio::test]
async fn update_replaces_metadata_and_preserves_play_count() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    let created = songs::create(&mut conn, "a.mp3", &sample_tags())
        .await
        .unwrap();

    // The playback side bumps the counter through the shared schema
    sqlx::query("UPDATE songs SET playCount = 42 WHERE id = ?")
        .bind(created.id)
        .execute(&mut *conn)
        .await
        .unwrap();

    let new_tags = SongTags {
        title: Some("Renamed".to_string()),
        ..SongTags::default()
    };
    songs::update(&mut conn, created.id, &new_tags).await.unwrap();

    let found = songs::find_by_path(&mut conn, "a.mp3")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.title.as_deref(), Some("Renamed"));
    // absent fields overwrite the previously populated ones
    assert_eq!(found.artist, None);
    assert_eq!(found.year, None);
    assert_eq!(found.play_count, 42);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    let err = songs::update(&mut conn, 999, &SongTags::default())
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn delete_by_id_removes_record() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    let created = songs::create(&mut conn, "a.mp3", &sample_tags())
        .await
        .unwrap();
    songs::delete_by_id(&mut conn, created.id).await.unwrap();

    assert!(songs::find_by_path(&mut conn, "a.mp3")
        .await
        .unwrap()
        .is_none());

    let err = songs::delete_by_id(&mut conn, created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn list_all_returns_id_path_pairs() {
    let test_db = TestDb::new().await;
    let mut conn = test_db.pool().acquire().await.unwrap();

    songs::create(&mut conn, "a.mp3", &SongTags::default())
        .await
        .unwrap();
    songs::create(&mut conn, "b/c.ogg", &SongTags::default())
        .await
        .unwrap();

    let all = songs::list_all(&mut conn).await.unwrap();
    let paths: Vec<&str> = all.iter().map(|r| r.path.as_str()).collect();

    assert_eq!(all.len(), 2);
    assert_eq!(paths, vec!["a.mp3", "b/c.ogg"]);
}

#[tokio::test]
async fn rolled_back_transaction_leaves_no_record() {
    let test_db = TestDb::new().await;

    {
        let mut tx = test_db.pool().begin().await.unwrap();
        songs::create(&mut tx, "a.mp3", &sample_tags()).await.unwrap();
        tx.rollback().await.unwrap();
    }

    let mut conn = test_db.pool().acquire().await.unwrap();
    assert!(songs::find_by_path(&mut conn, "a.mp3")
        .await
        .unwrap()
        .is_none());
}
