//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod notes;

use axum::Router;
use axum::routing::get;
use serde::Serialize;

use jotter_app::ports::NoteRepository;

use crate::state::AppState;

/// Success envelope wrapping every API response body.
#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

/// Build the `/v1` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: NoteRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/notes",
            get(notes::list::<R>)
                .post(notes::create::<R>)
                .put(notes::update::<R>),
        )
        .route(
            "/notes/{id}",
            get(notes::get::<R>).delete(notes::delete::<R>),
        )
}
