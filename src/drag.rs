//! Drag-and-drop reordering for the kanban board.
//!
//! A gesture is a `start`, any number of `hover` updates and one terminal
//! `drop_on`. Lane changes are committed eagerly while hovering so the
//! board can redraw the card in its new lane straight away; reordering
//! inside a lane only happens on drop. An abandoned gesture keeps whatever
//! lane change the last hover committed.
//!
//! The engine never mutates the collection it is given. Every structural
//! change is returned as a full replacement collection for the owner to
//! install and persist.

use crate::domain::card::{Card, CardId, Lane};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, trace};

/// Where a card lands inside its new lane when a hover relocates it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelocationPolicy {
    /// Move the card to the end of the target lane
    #[default]
    Append,
    /// Only change the lane; the card keeps its slot in the global
    /// collection, so its lane position follows global order
    KeepSlot,
}

/// Thing under the pointer during a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Empty space in a lane
    Lane(Lane),
    /// A specific card
    Card(CardId),
}

impl Target {
    /// Resolves a raw target token against the current collection.
    ///
    /// Lane identifiers take precedence over card identities. Returns `None`
    /// when the token names neither a lane nor a card that is still present.
    pub fn resolve(token: &str, cards: &[Card]) -> Option<Self> {
        if let Ok(lane) = Lane::from_str(token) {
            return Some(Self::Lane(lane));
        }

        let id = CardId::from_str(token).ok()?;
        cards
            .iter()
            .any(|card| card.id == id)
            .then_some(Self::Card(id))
    }
}

/// Gesture state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(CardId),
}

/// State machine translating drag gestures into collection updates
#[derive(Debug, Clone, Default)]
pub struct ReorderEngine {
    state: DragState,
    policy: RelocationPolicy,
}

impl ReorderEngine {
    pub fn new(policy: RelocationPolicy) -> Self {
        Self {
            state: DragState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn policy(&self) -> RelocationPolicy {
        self.policy
    }

    /// Identity of the card being dragged, if any
    pub fn dragged(&self) -> Option<CardId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// The dragged card as found in `cards`, for overlay rendering
    pub fn dragged_card<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        let id = self.dragged()?;
        cards.iter().find(|card| card.id == id)
    }

    /// Begins a gesture on `id`.
    ///
    /// Returns `false` without changing state when a gesture is already in
    /// progress or the card is not in the collection.
    pub fn start(&mut self, cards: &[Card], id: CardId) -> bool {
        if let DragState::Dragging(current) = self.state {
            debug!(%current, requested = %id, "drag already in progress");
            return false;
        }
        if !cards.iter().any(|card| card.id == id) {
            debug!(card = %id, "drag start on unknown card ignored");
            return false;
        }

        debug!(card = %id, "drag started");
        self.state = DragState::Dragging(id);
        true
    }

    /// Applies a hover update.
    ///
    /// Returns the replacement collection when the dragged card had to move
    /// to another lane, `None` otherwise.
    pub fn hover(&mut self, cards: &[Card], target: Option<&Target>) -> Option<Vec<Card>> {
        let dragged = self.dragged()?;
        let target = target?;

        let current = cards.iter().find(|card| card.id == dragged)?;
        let target_lane = match target {
            Target::Lane(lane) => *lane,
            Target::Card(id) if *id == dragged => return None,
            Target::Card(id) => match cards.iter().find(|card| card.id == *id) {
                Some(card) => card.lane,
                None => {
                    trace!(target = %id, "hover over stale card ignored");
                    return None;
                }
            },
        };

        if current.lane == target_lane {
            return None;
        }

        debug!(
            card = %dragged,
            from = %current.lane,
            to = %target_lane,
            policy = ?self.policy,
            "relocating card on hover"
        );
        Some(relocate(cards, dragged, target_lane, self.policy))
    }

    /// Terminates the gesture.
    ///
    /// Always returns the engine to [`DragState::Idle`]. Returns the
    /// replacement collection only when the drop reordered a lane.
    pub fn drop_on(&mut self, cards: &[Card], target: Option<&Target>) -> Option<Vec<Card>> {
        let dragged = self.dragged()?;
        self.state = DragState::Idle;

        let Some(target) = target else {
            debug!(card = %dragged, "drag abandoned without target");
            return None;
        };

        let target_id = match target {
            Target::Lane(lane) => {
                debug!(card = %dragged, %lane, "dropped on lane");
                return None;
            }
            Target::Card(id) if *id == dragged => return None,
            Target::Card(id) => *id,
        };

        let dragged_lane = cards.iter().find(|card| card.id == dragged)?.lane;
        let Some(target_lane) = cards
            .iter()
            .find(|card| card.id == target_id)
            .map(|card| card.lane)
        else {
            debug!(target = %target_id, "drop on stale card ignored");
            return None;
        };

        if dragged_lane != target_lane {
            return None;
        }

        move_within_lane(cards, dragged_lane, dragged, target_id)
    }
}

/// Reassigns `id` to `lane` following `policy`
fn relocate(cards: &[Card], id: CardId, lane: Lane, policy: RelocationPolicy) -> Vec<Card> {
    let mut next = cards.to_vec();
    match policy {
        RelocationPolicy::KeepSlot => {
            if let Some(card) = next.iter_mut().find(|card| card.id == id) {
                card.lane = lane;
            }
        }
        RelocationPolicy::Append => {
            if let Some(index) = next.iter().position(|card| card.id == id) {
                let mut card = next.remove(index);
                card.lane = lane;
                next.push(card);
            }
        }
    }
    next
}

/// Moves `dragged` to the lane index held by `target`, shifting the cards in
/// between by one. Cards of other lanes keep their global slots.
fn move_within_lane(
    cards: &[Card],
    lane: Lane,
    dragged: CardId,
    target: CardId,
) -> Option<Vec<Card>> {
    let slots: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.lane == lane)
        .map(|(index, _)| index)
        .collect();

    let from = slots.iter().position(|&slot| cards[slot].id == dragged)?;
    let to = slots.iter().position(|&slot| cards[slot].id == target)?;
    if from == to {
        return None;
    }

    let mut ordered: Vec<Card> = slots.iter().map(|&slot| cards[slot].clone()).collect();
    let card = ordered.remove(from);
    ordered.insert(to, card);

    let mut next = cards.to_vec();
    for (slot, card) in slots.into_iter().zip(ordered) {
        next[slot] = card;
    }

    debug!(card = %dragged, %lane, from, to, "reordered lane on drop");
    Some(next)
}
