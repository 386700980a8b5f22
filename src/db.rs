use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::models::song::{Song, SongData};

/// Client for the songs store. Cloning is cheap: the inner pool is shared
/// and safe for concurrent use by in-flight requests.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL at the given URL. The caller owns the URL;
    /// this type never reads the environment itself.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List songs with optional exact-match filters. A `None` filter is
    /// skipped entirely. No ORDER BY: result ordering is left to the store
    /// and is not guaranteed stable across calls.
    pub async fn list_songs(
        &self,
        group: Option<&str>,
        song: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Song>, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            r#"SELECT * FROM songs
               WHERE ($1::text IS NULL OR "group" = $1)
                 AND ($2::text IS NULL OR song = $2)
               LIMIT $3 OFFSET $4"#,
        )
        .bind(group)
        .bind(song)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_song(&self, id: i64) -> Result<Option<Song>, sqlx::Error> {
        sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new song and return the persisted row, including the
    /// store-assigned id.
    pub async fn create_song(&self, data: &SongData) -> Result<Song, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            r#"INSERT INTO songs ("group", song, release_date, text, link)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(&data.group)
        .bind(&data.song)
        .bind(&data.release_date)
        .bind(&data.text)
        .bind(&data.link)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrite every caller-supplied field of the row; the id never
    /// changes. Returns `None` when no row has that id.
    pub async fn update_song(
        &self,
        id: i64,
        data: &SongData,
    ) -> Result<Option<Song>, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            r#"UPDATE songs
               SET "group" = $1, song = $2, release_date = $3, text = $4, link = $5
               WHERE id = $6
               RETURNING *"#,
        )
        .bind(&data.group)
        .bind(&data.song)
        .bind(&data.release_date)
        .bind(&data.text)
        .bind(&data.link)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete by id. Deleting an id with no matching row is not an error.
    pub async fn delete_song(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Pool that defers connecting until first use, for exercising handler
    /// error paths without a live store.
    #[cfg(test)]
    pub fn connect_lazy(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(std::time::Duration::from_millis(250))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }
}
