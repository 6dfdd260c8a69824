//! Typed identifier newtype for notes.
//!
//! Storage assigns the underlying integer on insert; the newtype only wraps
//! an id that already exists (or the zero placeholder used before insert).

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Note`](crate::note::Note).
///
/// Serialises as a bare integer. The value is assigned by the storage engine
/// on insert and is immutable afterwards.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap an existing raw identifier.
    #[must_use]
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = NoteId::from_i64(42);
        let text = id.to_string();
        let parsed: NoteId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = NoteId::from_i64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        let result = NoteId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_default_to_zero_placeholder() {
        assert_eq!(NoteId::default().as_i64(), 0);
    }
}
