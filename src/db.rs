//! Recording store.
//!
//! Uses SQLx with SQLite for lightweight, embedded persistence of recordings
//! already resolved via MusicBrainz. The lookup service consults this store
//! before going to the network and writes web-service results back into it.

use std::path::Path;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::lookup::domain::TrackMatch;

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "trackmatch.db";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{DEFAULT_DB_NAME}"),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// A cached recording row.
#[derive(Debug, Clone, sqlx::FromRow)]
struct CachedRecording {
    recording_mbid: String,
    title: String,
    artist: String,
    artist_mbid: Option<String>,
    album: Option<String>,
    release_mbid: Option<String>,
    duration_ms: Option<i64>,
    first_release_date: Option<String>,
    score: i64,
}

impl From<CachedRecording> for TrackMatch {
    fn from(row: CachedRecording) -> Self {
        TrackMatch {
            score: row.score.clamp(0, 100) as u8,
            title: row.title,
            artist: row.artist,
            album: row.album,
            duration_ms: row.duration_ms.map(|d| d as u64),
            recording_mbid: Some(row.recording_mbid),
            release_mbid: row.release_mbid,
            artist_mbid: row.artist_mbid,
            first_release_date: row.first_release_date,
        }
    }
}

const SELECT_COLUMNS: &str = "recording_mbid, title, artist, artist_mbid, album, \
     release_mbid, duration_ms, first_release_date, score";

/// Insert or update a resolved recording.
///
/// Uses SQLite's UPSERT keyed on the recording MBID, so re-resolving the
/// same recording refreshes the cached row instead of duplicating it.
///
/// # Returns
///
/// The database ID of the inserted or updated row.
pub async fn upsert_recording(
    pool: &SqlitePool,
    mbid: &str,
    m: &TrackMatch,
) -> sqlx::Result<i64> {
    let cached_at = chrono::Utc::now().to_rfc3339();

    let row: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO recordings
            (recording_mbid, title, artist, artist_mbid, album, release_mbid,
             duration_ms, first_release_date, score, cached_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(recording_mbid) DO UPDATE SET
            title = excluded.title,
            artist = excluded.artist,
            artist_mbid = excluded.artist_mbid,
            album = excluded.album,
            release_mbid = excluded.release_mbid,
            duration_ms = excluded.duration_ms,
            first_release_date = excluded.first_release_date,
            score = excluded.score,
            cached_at = excluded.cached_at
        RETURNING id
        "#,
    )
    .bind(mbid)
    .bind(&m.title)
    .bind(&m.artist)
    .bind(&m.artist_mbid)
    .bind(&m.album)
    .bind(&m.release_mbid)
    .bind(m.duration_ms.map(|d| d as i64))
    .bind(&m.first_release_date)
    .bind(m.score as i64)
    .bind(cached_at)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Find cached recordings by exact title and artist, best score first.
pub async fn find_matches(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
) -> sqlx::Result<Vec<TrackMatch>> {
    let rows: Vec<CachedRecording> = sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM recordings \
         WHERE title = ? AND artist = ? ORDER BY score DESC"
    ))
    .bind(title)
    .bind(artist)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(TrackMatch::from).collect())
}

/// Find a cached recording by its MusicBrainz ID.
pub async fn find_by_mbid(pool: &SqlitePool, mbid: &str) -> sqlx::Result<Option<TrackMatch>> {
    let row: Option<CachedRecording> = sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM recordings WHERE recording_mbid = ?"
    ))
    .bind(mbid)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(TrackMatch::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_db() -> (SqlitePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = dir.path().join("test.db");
        let url = db_url(Some(&db_path));
        let pool = init_db(&url).await.expect("Failed to init db");
        (pool, dir)
    }

    fn sample_match(mbid: &str, title: &str, score: u8) -> TrackMatch {
        TrackMatch {
            score,
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            album: Some("Test Album".to_string()),
            duration_ms: Some(180_000),
            recording_mbid: Some(mbid.to_string()),
            release_mbid: Some("rel-1".to_string()),
            artist_mbid: Some("art-1".to_string()),
            first_release_date: Some("2001".to_string()),
        }
    }

    #[tokio::test]
    async fn init_db_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let pool = init_db(&db_url(Some(&db_path))).await.expect("init failed");
        assert!(db_path.exists());

        let matches = find_matches(&pool, "anything", "anyone").await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn upsert_then_find_roundtrip() {
        let (pool, _dir) = temp_db().await;
        let m = sample_match("mbid-1", "Test Song", 95);

        let id = upsert_recording(&pool, "mbid-1", &m).await.unwrap();
        assert!(id > 0);

        let found = find_matches(&pool, "Test Song", "Test Artist").await.unwrap();
        assert_eq!(found, vec![m]);
    }

    #[tokio::test]
    async fn upsert_is_idempotent_per_mbid() {
        let (pool, _dir) = temp_db().await;

        let id1 = upsert_recording(&pool, "mbid-1", &sample_match("mbid-1", "Old Title", 80))
            .await
            .unwrap();
        let id2 = upsert_recording(&pool, "mbid-1", &sample_match("mbid-1", "New Title", 90))
            .await
            .unwrap();
        assert_eq!(id1, id2);

        // Old title is gone, new one is in place
        assert!(find_matches(&pool, "Old Title", "Test Artist").await.unwrap().is_empty());
        let found = find_matches(&pool, "New Title", "Test Artist").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, 90);
    }

    #[tokio::test]
    async fn find_matches_orders_by_score() {
        let (pool, _dir) = temp_db().await;

        upsert_recording(&pool, "low", &sample_match("low", "Same Song", 60))
            .await
            .unwrap();
        upsert_recording(&pool, "high", &sample_match("high", "Same Song", 99))
            .await
            .unwrap();

        let found = find_matches(&pool, "Same Song", "Test Artist").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].recording_mbid.as_deref(), Some("high"));
        assert_eq!(found[1].recording_mbid.as_deref(), Some("low"));
    }

    #[tokio::test]
    async fn find_matches_is_exact_on_both_fields() {
        let (pool, _dir) = temp_db().await;
        upsert_recording(&pool, "mbid-1", &sample_match("mbid-1", "Test Song", 95))
            .await
            .unwrap();

        assert!(find_matches(&pool, "Test Song", "Other Artist").await.unwrap().is_empty());
        assert!(find_matches(&pool, "test song", "Test Artist").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_mbid_hits_and_misses() {
        let (pool, _dir) = temp_db().await;
        upsert_recording(&pool, "mbid-1", &sample_match("mbid-1", "Test Song", 95))
            .await
            .unwrap();

        let hit = find_by_mbid(&pool, "mbid-1").await.unwrap();
        assert_eq!(hit.unwrap().title, "Test Song");

        assert!(find_by_mbid(&pool, "missing").await.unwrap().is_none());
    }
}
