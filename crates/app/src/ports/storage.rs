//! Storage port — repository trait for note persistence.

use std::future::Future;

use jotter_domain::error::JotterError;
use jotter_domain::id::NoteId;
use jotter_domain::note::{Note, NoteDraft, NotePatch};

/// Persistence verbs for the `notes` table.
///
/// Each verb is a single round-trip with no transactional envelope; the
/// storage engine serialises concurrent writes on its own.
pub trait NoteRepository {
    /// Insert a draft; storage assigns the id and both timestamps.
    fn create(&self, draft: NoteDraft) -> impl Future<Output = Result<Note, JotterError>> + Send;

    /// Primary-key lookup.
    fn get_by_id(
        &self,
        id: NoteId,
    ) -> impl Future<Output = Result<Option<Note>, JotterError>> + Send;

    /// Every row, in storage-default order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Note>, JotterError>> + Send;

    /// Apply the present fields of `patch` to the row with `id` and re-stamp
    /// `updated_at`. Returns the number of rows affected (zero when the id
    /// does not exist).
    fn update(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> impl Future<Output = Result<u64, JotterError>> + Send;

    /// Delete by primary key. Zero rows affected is not an error.
    fn delete(&self, id: NoteId) -> impl Future<Output = Result<(), JotterError>> + Send;
}
