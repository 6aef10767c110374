//! Root application state.
//!
//! [`Dashboard`] owns the three dashboard collections and is the only place
//! they change. Every operation builds a new collection and installs it
//! through one of the `replace_*` methods, which also mark the collection
//! for the next [`Dashboard::save`].

use crate::{
    config::HubConfig,
    domain::{
        board::{self, BoardLayout, BoardStats, LaneDefinition},
        Card, CardId, ChecklistProgress, Lane, Note, TodoItem,
    },
    drag::{DragState, ReorderEngine, Target},
    error::{HubError, Result},
    storage::Storage,
};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
struct Dirty {
    cards: bool,
    todos: bool,
    notes: bool,
    active_note: bool,
}

impl Dirty {
    fn any(&self) -> bool {
        self.cards || self.todos || self.notes || self.active_note
    }
}

/// State container for the board, the checklist and the notes
#[derive(Debug, Clone)]
pub struct Dashboard {
    layout: BoardLayout,
    cards: Vec<Card>,
    todos: Vec<TodoItem>,
    notes: Vec<Note>,
    active_note: Option<Uuid>,
    engine: ReorderEngine,
    dirty: Dirty,
}

impl Dashboard {
    /// Creates an empty dashboard
    pub fn new(config: &HubConfig) -> Self {
        Self {
            layout: BoardLayout::new(config.board_name.clone()),
            cards: Vec::new(),
            todos: Vec::new(),
            notes: Vec::new(),
            active_note: None,
            engine: ReorderEngine::new(config.relocation),
            dirty: Dirty::default(),
        }
    }

    /// Loads every collection from `storage`
    pub async fn load<S: Storage + ?Sized>(storage: &S, config: &HubConfig) -> Result<Self> {
        if !storage.is_initialized().await {
            return Err(HubError::StorageNotInitialized);
        }

        let mut dashboard = Self::new(config);
        dashboard.cards = storage.load_cards().await?;
        dashboard.todos = storage.load_todos().await?;
        dashboard.notes = storage.load_notes().await?;
        dashboard.active_note = storage.load_active_note().await?;

        info!(
            cards = dashboard.cards.len(),
            todos = dashboard.todos.len(),
            notes = dashboard.notes.len(),
            "dashboard loaded"
        );
        Ok(dashboard)
    }

    /// Writes the collections changed since the last save
    pub async fn save<S: Storage + ?Sized>(&mut self, storage: &S) -> Result<()> {
        if self.dirty.cards {
            storage.save_cards(&self.cards).await?;
        }
        if self.dirty.todos {
            storage.save_todos(&self.todos).await?;
        }
        if self.dirty.notes {
            storage.save_notes(&self.notes).await?;
        }
        if self.dirty.active_note {
            storage.save_active_note(self.active_note).await?;
        }

        debug!(dirty = ?self.dirty, "dashboard saved");
        self.dirty = Dirty::default();
        Ok(())
    }

    /// Whether anything changed since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty.any()
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Lane definitions in board order
    pub fn lanes(&self) -> &[LaneDefinition] {
        &self.layout.lanes
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one lane, in lane order
    pub fn lane_cards(&self, lane: Lane) -> Vec<&Card> {
        board::lane_cards(&self.cards, lane)
    }

    /// Index of a card within its lane
    pub fn position_in_lane(&self, id: &CardId) -> Option<usize> {
        board::position_in_lane(&self.cards, id)
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active_note_id(&self) -> Option<Uuid> {
        self.active_note
    }

    /// The active note, if its id still resolves
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active_note?;
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats::from_cards(&self.cards)
    }

    pub fn checklist_progress(&self) -> ChecklistProgress {
        ChecklistProgress::from_items(&self.todos)
    }

    pub fn drag_state(&self) -> DragState {
        self.engine.state()
    }

    /// The card to draw in the drag overlay
    pub fn dragged_card(&self) -> Option<&Card> {
        self.engine.dragged_card(&self.cards)
    }

    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.dirty.cards = true;
    }

    pub fn replace_todos(&mut self, todos: Vec<TodoItem>) {
        self.todos = todos;
        self.dirty.todos = true;
    }

    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.dirty.notes = true;
    }

    pub fn set_active_note(&mut self, id: Option<Uuid>) {
        self.active_note = id;
        self.dirty.active_note = true;
    }

    // Board

    /// Appends a new card to `lane`
    pub fn create_card(&mut self, title: &str, description: &str, lane: Lane) -> Result<CardId> {
        let card = Card::new(title, description, lane)?;
        let id = card.id;

        let mut cards = self.cards.clone();
        cards.push(card);
        self.replace_cards(cards);

        debug!(card = %id, %lane, "card created");
        Ok(id)
    }

    pub fn delete_card(&mut self, id: &CardId) -> Result<()> {
        if !self.cards.iter().any(|card| &card.id == id) {
            return Err(HubError::CardNotFound(id.to_string()));
        }

        let cards = self
            .cards
            .iter()
            .filter(|card| &card.id != id)
            .cloned()
            .collect();
        self.replace_cards(cards);
        Ok(())
    }

    /// Replaces the title and description of a card
    pub fn edit_card(&mut self, id: &CardId, title: &str, description: &str) -> Result<()> {
        let mut cards = self.cards.clone();
        let card = cards
            .iter_mut()
            .find(|card| &card.id == id)
            .ok_or_else(|| HubError::CardNotFound(id.to_string()))?;

        card.set_title(title)?;
        card.set_description(description);
        self.replace_cards(cards);
        Ok(())
    }

    /// Begins a drag gesture on a card
    pub fn drag_start(&mut self, id: CardId) -> bool {
        self.engine.start(&self.cards, id)
    }

    /// Feeds a hover update; `target` is the raw token under the pointer.
    /// Returns whether the collection changed.
    pub fn drag_hover(&mut self, target: Option<&str>) -> bool {
        let target = target.and_then(|token| Target::resolve(token, &self.cards));
        match self.engine.hover(&self.cards, target.as_ref()) {
            Some(cards) => {
                self.replace_cards(cards);
                true
            }
            None => false,
        }
    }

    /// Ends the drag gesture; `target` is the raw token under the pointer.
    /// Returns whether the collection changed.
    pub fn drag_drop(&mut self, target: Option<&str>) -> bool {
        let target = target.and_then(|token| Target::resolve(token, &self.cards));
        match self.engine.drop_on(&self.cards, target.as_ref()) {
            Some(cards) => {
                self.replace_cards(cards);
                true
            }
            None => false,
        }
    }

    // Checklist

    /// Appends a todo; blank text adds nothing and returns `None`
    pub fn add_todo(&mut self, text: &str) -> Option<Uuid> {
        let item = TodoItem::new(text)?;
        let id = item.id;

        let mut todos = self.todos.clone();
        todos.push(item);
        self.replace_todos(todos);
        Some(id)
    }

    pub fn toggle_todo(&mut self, id: Uuid) -> Result<()> {
        let mut todos = self.todos.clone();
        todos
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| HubError::TodoNotFound(id.to_string()))?
            .toggle();
        self.replace_todos(todos);
        Ok(())
    }

    pub fn delete_todo(&mut self, id: Uuid) -> Result<()> {
        if !self.todos.iter().any(|item| item.id == id) {
            return Err(HubError::TodoNotFound(id.to_string()));
        }

        let todos = self
            .todos
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.replace_todos(todos);
        Ok(())
    }

    // Notes

    /// Prepends an untitled note and makes it active
    pub fn add_note(&mut self) -> Uuid {
        let note = Note::new();
        let id = note.id;

        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(note);
        notes.extend(self.notes.iter().cloned());
        self.replace_notes(notes);
        self.set_active_note(Some(id));
        id
    }

    /// Deletes a note. When it was active, the first remaining note becomes
    /// active instead.
    pub fn delete_note(&mut self, id: Uuid) -> Result<()> {
        if !self.notes.iter().any(|note| note.id == id) {
            return Err(HubError::NoteNotFound(id.to_string()));
        }

        let notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        let next_active = notes.first().map(|note| note.id);
        self.replace_notes(notes);

        if self.active_note == Some(id) {
            self.set_active_note(next_active);
        }
        Ok(())
    }

    pub fn rename_note(&mut self, id: Uuid, title: &str) -> Result<()> {
        self.update_note(id, |note| note.rename(title))
    }

    pub fn update_note_content(&mut self, id: Uuid, content: &str) -> Result<()> {
        self.update_note(id, |note| {
            note.set_content(content);
            Ok(())
        })
    }

    fn update_note(
        &mut self,
        id: Uuid,
        edit: impl FnOnce(&mut Note) -> Result<()>,
    ) -> Result<()> {
        let mut notes = self.notes.clone();
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| HubError::NoteNotFound(id.to_string()))?;
        edit(note)?;
        self.replace_notes(notes);
        Ok(())
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&HubConfig::default())
    }
}
