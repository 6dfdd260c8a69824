//! Note — the sole persisted resource, one row per instance.

use serde::{Deserialize, Serialize};

use crate::id::NoteId;
use crate::time::Timestamp;

/// Status value assigned to a note when none is supplied.
///
/// The column carries no enumerated meaning; `1` is simply the storage
/// default inherited from the schema.
pub const DEFAULT_STATUS: i64 = 1;

/// A persisted note.
///
/// `id` and both timestamps are assigned by the storage engine; `title` has
/// no length or uniqueness constraint and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub status: i64,
    pub title: String,
}

/// Input for creating a note.
///
/// Carries only the caller-controlled fields; id and timestamps are filled
/// in by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub status: i64,
}

impl NoteDraft {
    /// Create a draft with the default status.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: DEFAULT_STATUS,
        }
    }

    /// Override the status value.
    #[must_use]
    pub fn with_status(mut self, status: i64) -> Self {
        self.status = status;
        self
    }
}

/// Partial update of a note.
///
/// `None` means "leave the field unchanged"; `Some` is always applied,
/// including explicit zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub status: Option<i64>,
}

impl NotePatch {
    /// `true` when no field would be touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}
