//! `SQLite` implementation of [`NoteRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use jotter_app::ports::NoteRepository;
use jotter_domain::error::JotterError;
use jotter_domain::id::NoteId;
use jotter_domain::note::{Note, NoteDraft, NotePatch};
use jotter_domain::time::now;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Note`].
struct Wrapper(Note);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Note> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
        let status: i64 = row.try_get("status")?;
        let title: String = row.try_get("title")?;

        Ok(Self(Note {
            id: NoteId::from_i64(id),
            created_at,
            updated_at,
            status,
            title,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO notes (created_at, updated_at, status, title) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM notes WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM notes";
// COALESCE keeps columns untouched for fields absent from the patch.
const UPDATE: &str =
    "UPDATE notes SET title = COALESCE(?, title), status = COALESCE(?, status), updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM notes WHERE id = ?";

/// `SQLite`-backed note repository.
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn create(&self, draft: NoteDraft) -> impl Future<Output = Result<Note, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = now();
            let result = sqlx::query(INSERT)
                .bind(ts)
                .bind(ts)
                .bind(draft.status)
                .bind(&draft.title)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Note {
                id: NoteId::from_i64(result.last_insert_rowid()),
                created_at: ts,
                updated_at: ts,
                status: draft.status,
                title: draft.title,
            })
        }
    }

    fn get_by_id(
        &self,
        id: NoteId,
    ) -> impl Future<Output = Result<Option<Note>, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Note>, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> impl Future<Output = Result<u64, JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(patch.title)
                .bind(patch.status)
                .bind(now())
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: NoteId) -> impl Future<Output = Result<(), JotterError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
