//! # jotter-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **notes REST API** under `/v1/notes`
//! - Serve the **response-format demo endpoints** (`/json`, `/xml`, `/yaml`,
//!   `/jsonsecure`, `/jsonp`, `/jsonascii`) and the health probes
//! - Serve **static files** under `/assets` from a local directory
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `jotter-app` (for the port trait and service) and
//! `jotter-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod render;
pub mod router;
pub mod state;
