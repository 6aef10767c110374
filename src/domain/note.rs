use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-form note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    const UNTITLED: &'static str = "Untitled Note";

    /// Creates an empty, untitled note
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: Self::UNTITLED.to_string(),
            content: String::new(),
            updated_at: Utc::now(),
        }
    }

    /// Renames the note. The title is trimmed and must not be blank; a
    /// rejected rename leaves the note untouched.
    pub fn rename(&mut self, title: &str) -> Result<(), crate::error::HubError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(crate::error::HubError::EmptyTitle);
        }
        self.title = title.to_string();
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Number of characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note() {
        let note = Note::new();
        assert_eq!(note.title, "Untitled Note");
        assert!(note.content.is_empty());
        assert_eq!(note.word_count(), 0);
    }

    #[test]
    fn test_edits_update_updated_at() {
        let mut note = Note::new();
        let initial = note.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        note.rename("Meeting").unwrap();
        assert_eq!(note.title, "Meeting");
        assert!(note.updated_at > initial);

        let renamed_at = note.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(10));
        note.set_content("agenda");
        assert!(note.updated_at > renamed_at);
    }

    #[test]
    fn test_rename_trims_and_rejects_blank() {
        let mut note = Note::new();
        let initial = note.updated_at;

        assert!(matches!(
            note.rename("  \t "),
            Err(crate::error::HubError::EmptyTitle)
        ));
        assert_eq!(note.title, "Untitled Note");
        assert_eq!(note.updated_at, initial);

        note.rename("  Retro  ").unwrap();
        assert_eq!(note.title, "Retro");
    }

    #[test]
    fn test_counts() {
        let mut note = Note::new();
        note.set_content("  hello   wörld\nagain ");
        assert_eq!(note.word_count(), 3);
        assert_eq!(note.char_count(), 22);

        note.set_content("   ");
        assert_eq!(note.word_count(), 0);
        assert_eq!(note.char_count(), 3);
    }
}
