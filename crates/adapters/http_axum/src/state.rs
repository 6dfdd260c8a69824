//! Shared application state for axum handlers.

use std::sync::Arc;

use jotter_app::ports::NoteRepository;
use jotter_app::services::note_service::NoteService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be `Clone`
/// — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Note CRUD service.
    pub note_service: Arc<NoteService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            note_service: Arc::clone(&self.note_service),
        }
    }
}

impl<R> AppState<R>
where
    R: NoteRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(note_service: NoteService<R>) -> Self {
        Self {
            note_service: Arc::new(note_service),
        }
    }
}
