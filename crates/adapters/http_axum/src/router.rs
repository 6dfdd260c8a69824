//! Axum router assembly.

use std::any::Any;
use std::path::Path;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use jotter_app::ports::NoteRepository;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the resource API under `/v1`, the response-format demos and health
/// probes at the root, and static files from `assets_dir` under `/assets`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response via the
/// `tracing` ecosystem and a [`CatchPanicLayer`] that degrades handler
/// panics to an error response instead of killing the connection.
pub fn build<R>(state: AppState<R>, assets_dir: impl AsRef<Path>) -> Router
where
    R: NoteRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/ping", get(ping))
        .merge(crate::render::routes())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .nest("/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn ping() -> &'static str {
    "pong"
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}
