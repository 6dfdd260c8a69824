//! Note service — use-cases for managing notes.

use jotter_domain::error::{JotterError, NotFoundError};
use jotter_domain::id::NoteId;
use jotter_domain::note::{Note, NoteDraft, NotePatch};

use crate::ports::NoteRepository;

/// Application service for note CRUD operations.
pub struct NoteService<R> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new note; storage assigns the id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_note(&self, draft: NoteDraft) -> Result<Note, JotterError> {
        self.repo.create(draft).await
    }

    /// Look up a note by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`JotterError::NotFound`] when no note with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_note(&self, id: NoteId) -> Result<Note, JotterError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Note",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all notes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_notes(&self) -> Result<Vec<Note>, JotterError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing note.
    ///
    /// Fields absent from the patch are left unchanged; present fields are
    /// always applied, including explicit zero values.
    ///
    /// # Errors
    ///
    /// Returns [`JotterError::NotFound`] when no row matched `id`, or a
    /// storage error from the repository.
    pub async fn update_note(&self, id: NoteId, patch: NotePatch) -> Result<NoteId, JotterError> {
        let affected = self.repo.update(id, patch).await?;
        if affected == 0 {
            return Err(NotFoundError {
                entity: "Note",
                id: id.to_string(),
            }
            .into());
        }
        Ok(id)
    }

    /// Delete a note by id.
    ///
    /// Deleting an id that does not exist succeeds; the storage layer
    /// reports success on zero rows affected.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_note(&self, id: NoteId) -> Result<(), JotterError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    use jotter_domain::time::now;

    struct InMemoryNoteRepo {
        store: Mutex<BTreeMap<NoteId, Note>>,
        next_id: Mutex<i64>,
    }

    impl Default for InMemoryNoteRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    impl NoteRepository for InMemoryNoteRepo {
        fn create(&self, draft: NoteDraft) -> impl Future<Output = Result<Note, JotterError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            let id = NoteId::from_i64(*next_id);
            *next_id += 1;

            let ts = now();
            let note = Note {
                id,
                created_at: ts,
                updated_at: ts,
                status: draft.status,
                title: draft.title,
            };
            let mut store = self.store.lock().unwrap();
            store.insert(id, note.clone());
            async { Ok(note) }
        }

        fn get_by_id(
            &self,
            id: NoteId,
        ) -> impl Future<Output = Result<Option<Note>, JotterError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Note>, JotterError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Note> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: NoteId,
            patch: NotePatch,
        ) -> impl Future<Output = Result<u64, JotterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let affected = match store.get_mut(&id) {
                Some(note) => {
                    if let Some(title) = patch.title {
                        note.title = title;
                    }
                    if let Some(status) = patch.status {
                        note.status = status;
                    }
                    note.updated_at = now();
                    1
                }
                None => 0,
            };
            async move { Ok(affected) }
        }

        fn delete(&self, id: NoteId) -> impl Future<Output = Result<(), JotterError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    fn make_service() -> NoteService<InMemoryNoteRepo> {
        NoteService::new(InMemoryNoteRepo::default())
    }

    #[tokio::test]
    async fn should_create_note_and_assign_id() {
        let svc = make_service();

        let created = svc.create_note(NoteDraft::new("Groceries")).await.unwrap();
        assert_ne!(created.id.as_i64(), 0);

        let fetched = svc.get_note(created.id).await.unwrap();
        assert_eq!(fetched.title, "Groceries");
        assert_eq!(fetched.status, 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_note_missing() {
        let svc = make_service();
        let result = svc.get_note(NoteId::from_i64(99)).await;
        assert!(matches!(result, Err(JotterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_notes() {
        let svc = make_service();
        svc.create_note(NoteDraft::new("first")).await.unwrap();
        svc.create_note(NoteDraft::new("second")).await.unwrap();

        let all = svc.list_notes().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_only_present_fields() {
        let svc = make_service();
        let note = svc
            .create_note(NoteDraft::new("draft").with_status(3))
            .await
            .unwrap();

        let patch = NotePatch {
            title: Some("final".to_string()),
            status: None,
        };
        svc.update_note(note.id, patch).await.unwrap();

        let fetched = svc.get_note(note.id).await.unwrap();
        assert_eq!(fetched.title, "final");
        assert_eq!(fetched.status, 3);
    }

    #[tokio::test]
    async fn should_apply_explicit_zero_status() {
        let svc = make_service();
        let note = svc.create_note(NoteDraft::new("reset me")).await.unwrap();

        let patch = NotePatch {
            title: None,
            status: Some(0),
        };
        svc.update_note(note.id, patch).await.unwrap();

        let fetched = svc.get_note(note.id).await.unwrap();
        assert_eq!(fetched.status, 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_note() {
        let svc = make_service();
        let patch = NotePatch {
            title: Some("ghost".to_string()),
            status: None,
        };
        let result = svc.update_note(NoteId::from_i64(404), patch).await;
        assert!(matches!(result, Err(JotterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_note() {
        let svc = make_service();
        let note = svc.create_note(NoteDraft::new("ephemeral")).await.unwrap();

        svc.delete_note(note.id).await.unwrap();

        let result = svc.get_note(note.id).await;
        assert!(matches!(result, Err(JotterError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_missing_note() {
        let svc = make_service();
        svc.delete_note(NoteId::from_i64(404)).await.unwrap();
    }
}
