use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a card (a random v4 UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CardId {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::HubError::InvalidCardId(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lane of the board a card sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lane {
    Todo,
    InProgress,
    Complete,
}

impl Lane {
    /// Every lane, in board order
    pub const ALL: [Lane; 3] = [Lane::Todo, Lane::InProgress, Lane::Complete];

    /// Identifier used on disk and as a drop-target token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }
}

impl FromStr for Lane {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lane::ALL
            .into_iter()
            .find(|lane| lane.as_str() == s)
            .ok_or_else(|| crate::error::HubError::UnknownLane(s.to_string()))
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A card on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub lane: Lane,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card in the given lane.
    ///
    /// The title is trimmed and must not be blank. A blank description is
    /// stored as no description at all.
    pub fn new(
        title: &str,
        description: &str,
        lane: Lane,
    ) -> Result<Self, crate::error::HubError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(crate::error::HubError::EmptyTitle);
        }

        Ok(Self {
            id: CardId::new(),
            title: title.to_string(),
            description: normalize_description(description),
            lane,
            created_at: Utc::now(),
        })
    }

    /// Sets the title
    pub fn set_title(&mut self, title: &str) -> Result<(), crate::error::HubError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(crate::error::HubError::EmptyTitle);
        }
        self.title = title.to_string();
        Ok(())
    }

    /// Sets the description; blank input clears it
    pub fn set_description(&mut self, description: &str) {
        self.description = normalize_description(description);
    }
}

fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_parsing() {
        let id = CardId::new();
        let parsed = CardId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(CardId::from_str("not-a-uuid").is_err());
        assert!(CardId::from_str("").is_err());
    }

    #[test]
    fn test_card_ids_are_unique() {
        assert_ne!(CardId::new(), CardId::new());
    }

    #[test]
    fn test_card_id_wraps_v4_uuid() {
        let id = CardId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
        assert_eq!(id.as_uuid().to_string(), id.to_string());
    }

    #[test]
    fn test_lane_parsing() {
        assert_eq!(Lane::from_str("todo").unwrap(), Lane::Todo);
        assert_eq!(Lane::from_str("in-progress").unwrap(), Lane::InProgress);
        assert_eq!(Lane::from_str("complete").unwrap(), Lane::Complete);
        assert!(Lane::from_str("done").is_err());
        assert!(Lane::from_str("Todo").is_err());
    }

    #[test]
    fn test_lane_serialization_names() {
        let json = serde_json::to_string(&Lane::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let lane: Lane = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(lane, Lane::Complete);
    }

    #[test]
    fn test_card_creation() {
        let card = Card::new("  Write docs ", "", Lane::Todo).unwrap();
        assert_eq!(card.title, "Write docs");
        assert!(card.description.is_none());
        assert_eq!(card.lane, Lane::Todo);
    }

    #[test]
    fn test_card_creation_rejects_blank_title() {
        assert!(matches!(
            Card::new("   ", "desc", Lane::Todo),
            Err(crate::error::HubError::EmptyTitle)
        ));
    }

    #[test]
    fn test_card_field_edits() {
        let mut card = Card::new("Original", "Some detail", Lane::InProgress).unwrap();
        assert_eq!(card.description.as_deref(), Some("Some detail"));

        card.set_title("Renamed").unwrap();
        assert_eq!(card.title, "Renamed");
        assert!(card.set_title("").is_err());
        assert_eq!(card.title, "Renamed");

        card.set_description("   ");
        assert!(card.description.is_none());
    }

    #[test]
    fn test_card_serialization_without_description() {
        let card = Card::new("Test", "", Lane::Todo).unwrap();
        let json = serde_json::to_string(&card).unwrap();

        assert!(!json.contains("description"));
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
