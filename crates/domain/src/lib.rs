//! # jotter-domain
//!
//! Pure domain model for the jotter note service.
//!
//! ## Responsibilities
//! - Foundational types: the [`id::NoteId`] identifier, error conventions,
//!   timestamps
//! - Define the **Note** entity (the sole persisted resource) together with
//!   its write-side value types ([`note::NoteDraft`], [`note::NotePatch`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod note;
pub mod time;
