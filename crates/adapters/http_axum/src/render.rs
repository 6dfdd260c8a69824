//! Response-format demo endpoints.
//!
//! Each handler renders the same fixed demo note in a different encoding.
//! These routes are illustrative only and sit outside the `/v1` resource API.

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use jotter_domain::id::NoteId;
use jotter_domain::note::{DEFAULT_STATUS, Note};

use crate::api::Data;
use crate::error::ErrorBody;

/// Anti-hijacking prefix emitted by the `jsonsecure` endpoint.
const SECURE_PREFIX: &str = "while(1);";

/// Query parameters accepted by the `jsonp` endpoint.
#[derive(Deserialize)]
pub struct JsonpQuery {
    pub callback: Option<String>,
}

/// Build the demo-format sub-router.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/json", get(json))
        .route("/xml", get(xml))
        .route("/yaml", get(yaml))
        .route("/jsonsecure", get(secure_json))
        .route("/jsonp", get(jsonp))
        .route("/jsonascii", get(ascii_json))
}

/// The fixed demo payload. Deterministic so every encoding is reproducible.
fn demo_note() -> Note {
    Note {
        id: NoteId::from_i64(0),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
        status: DEFAULT_STATUS,
        title: "Demo Title".to_string(),
    }
}

fn envelope_json() -> Result<String, serde_json::Error> {
    serde_json::to_string(&Data { data: demo_note() })
}

fn render_failure(err: &dyn std::error::Error) -> Response {
    tracing::error!(error = %err, "failed to render demo payload");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}

/// `GET /json`
async fn json() -> Response {
    Json(Data { data: demo_note() }).into_response()
}

/// `GET /xml`
async fn xml() -> Response {
    match quick_xml::se::to_string_with_root("note", &demo_note()) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/xml")], body).into_response(),
        Err(err) => render_failure(&err),
    }
}

/// `GET /yaml`
async fn yaml() -> Response {
    match serde_yaml::to_string(&Data { data: demo_note() }) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/x-yaml")], body).into_response(),
        Err(err) => render_failure(&err),
    }
}

/// `GET /jsonsecure`
async fn secure_json() -> Response {
    match envelope_json() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/json")],
            format!("{SECURE_PREFIX}{body}"),
        )
            .into_response(),
        Err(err) => render_failure(&err),
    }
}

/// `GET /jsonp`
///
/// Wraps the JSON body in `callback(...)` when a `callback` query parameter
/// is present; falls back to plain JSON otherwise.
async fn jsonp(Query(params): Query<JsonpQuery>) -> Response {
    let Some(callback) = params.callback else {
        return json().await;
    };
    match envelope_json() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/javascript")],
            format!("{callback}({body});"),
        )
            .into_response(),
        Err(err) => render_failure(&err),
    }
}

/// `GET /jsonascii`
async fn ascii_json() -> Response {
    match envelope_json() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/json")],
            escape_non_ascii(&body),
        )
            .into_response(),
        Err(err) => render_failure(&err),
    }
}

/// Escape every non-ASCII character as `\uXXXX`, using surrogate pairs for
/// characters outside the basic multilingual plane.
fn escape_non_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u16; 2];
    for ch in input.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}
