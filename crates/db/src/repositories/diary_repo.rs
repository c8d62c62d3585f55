//! Repository for the `diary` table.

use diary_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::diary::{DiaryEntry, NewDiaryEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, content, date";

/// Provides CRUD operations for diary entries.
pub struct DiaryRepo;

impl DiaryRepo {
    /// Insert a new entry dated `date`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewDiaryEntry,
        date: Timestamp,
    ) -> Result<DiaryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO diary (title, author, content, date)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.content)
            .bind(date)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<DiaryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diary WHERE id = ?");
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<DiaryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diary ORDER BY id");
        sqlx::query_as::<_, DiaryEntry>(&query).fetch_all(pool).await
    }

    /// Overwrite the editable fields of an entry. `date` is left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &NewDiaryEntry,
    ) -> Result<Option<DiaryEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE diary SET
                title = ?,
                author = ?,
                content = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.content)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM diary WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
