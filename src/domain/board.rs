use crate::domain::card::{Card, CardId, Lane};
use serde::{Deserialize, Serialize};

/// Display definition of a board lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneDefinition {
    pub lane: Lane,
    pub title: String,
}

impl LaneDefinition {
    pub fn new(lane: Lane, title: impl Into<String>) -> Self {
        Self {
            lane,
            title: title.into(),
        }
    }
}

/// Board layout: a name and the ordered lanes rendered for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub name: String,
    pub lanes: Vec<LaneDefinition>,
}

impl BoardLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lanes: vec![
                LaneDefinition::new(Lane::Todo, "Todo"),
                LaneDefinition::new(Lane::InProgress, "In Progress"),
                LaneDefinition::new(Lane::Complete, "Complete"),
            ],
        }
    }

    /// Gets the definition for a lane
    pub fn get_lane(&self, lane: Lane) -> Option<&LaneDefinition> {
        self.lanes.iter().find(|def| def.lane == lane)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new("Project Hub")
    }
}

/// Cards of one lane, in lane order
pub fn lane_cards(cards: &[Card], lane: Lane) -> Vec<&Card> {
    cards.iter().filter(|card| card.lane == lane).collect()
}

/// Position of a card within its lane's sub-sequence
pub fn position_in_lane(cards: &[Card], id: &CardId) -> Option<usize> {
    let lane = cards.iter().find(|card| &card.id == id)?.lane;
    cards
        .iter()
        .filter(|card| card.lane == lane)
        .position(|card| &card.id == id)
}

/// Counters shown in the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl BoardStats {
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            total: cards.len(),
            active: cards.iter().filter(|c| c.lane == Lane::InProgress).count(),
            completed: cards.iter().filter(|c| c.lane == Lane::Complete).count(),
        }
    }
}
