//! # jotter-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement:
//!   - `NoteRepository` — the five persistence verbs for notes
//! - Define the **use-case surface** as a service struct:
//!   - `NoteService` — create, get, list, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `jotter-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
