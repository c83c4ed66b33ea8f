//! Candidate and chip records.

use serde::{Deserialize, Serialize};

/// A selectable person from the fixed dataset.
///
/// Candidates are loaded once at startup and never mutated by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier within the dataset.
    pub id: String,
    /// Display name, used for matching.
    pub name: String,
    /// Email address shown next to the name in the overlay.
    pub email: String,
    /// Opaque avatar reference (usually a URL).
    #[serde(default)]
    pub avatar: String,
}

impl Candidate {
    /// Create a new candidate.
    #[cfg(test)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }
}

/// A selected candidate rendered as a removable tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// The underlying candidate.
    pub candidate: Candidate,
    /// Armed for deletion by a repeated backspace.
    pub highlighted: bool,
}

impl Chip {
    /// Wrap a candidate in an unarmed chip.
    pub fn new(candidate: Candidate) -> Self {
        Self {
            candidate,
            highlighted: false,
        }
    }

    /// The id of the underlying candidate.
    pub fn id(&self) -> &str {
        &self.candidate.id
    }

    /// The display name of the underlying candidate.
    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    /// Return a copy with the given highlight flag.
    pub fn with_highlight(&self, highlighted: bool) -> Self {
        Self {
            candidate: self.candidate.clone(),
            highlighted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserialize_without_avatar() {
        let json = r#"{"id":"7","name":"Gus","email":"gus@example.com"}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, "7");
        assert!(candidate.avatar.is_empty());
    }

    #[test]
    fn test_chip_starts_unarmed() {
        let chip = Chip::new(Candidate::new("1", "Ann", "ann@example.com", ""));
        assert!(!chip.highlighted);
        assert_eq!(chip.id(), "1");
        assert_eq!(chip.name(), "Ann");
    }

    #[test]
    fn test_with_highlight_keeps_candidate() {
        let chip = Chip::new(Candidate::new("1", "Ann", "ann@example.com", ""));
        let armed = chip.with_highlight(true);
        assert!(armed.highlighted);
        assert_eq!(armed.candidate, chip.candidate);
    }
}
