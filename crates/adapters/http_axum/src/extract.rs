//! Body extractor selecting the deserializer by Content-Type.
//!
//! Mutating endpoints accept both JSON and form-encoded bodies. `Payload`
//! binds either into explicit typed request structs:
//! `application/x-www-form-urlencoded` selects the form deserializer,
//! anything else the JSON one.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

use jotter_domain::error::{JotterError, ValidationError};

use crate::error::ApiError;

/// Typed request body, bound from JSON or form-encoded content.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_content_type(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| bind_error(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| bind_error(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}

fn is_form_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
}

fn bind_error(message: String) -> ApiError {
    ApiError::from(JotterError::Validation(ValidationError::Body(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn should_detect_form_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        assert!(is_form_content_type(&headers));
    }

    #[test]
    fn should_detect_form_content_type_with_charset() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        assert!(is_form_content_type(&headers));
    }

    #[test]
    fn should_not_detect_json_as_form() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert!(!is_form_content_type(&headers));
    }

    #[test]
    fn should_not_detect_missing_content_type_as_form() {
        assert!(!is_form_content_type(&HeaderMap::new()));
    }
}
