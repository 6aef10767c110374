use crate::{
    domain::{Card, Note, TodoItem},
    error::Result,
};
use async_trait::async_trait;
use uuid::Uuid;

pub mod file_storage;

/// Storage trait for persisting the dashboard collections.
///
/// Each collection lives under its own key and is always written whole.
/// Loading a key that was never saved yields its empty default.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Checks if the storage has been initialized
    async fn is_initialized(&self) -> bool;

    async fn save_cards(&self, cards: &[Card]) -> Result<()>;

    async fn load_cards(&self) -> Result<Vec<Card>>;

    async fn save_todos(&self, todos: &[TodoItem]) -> Result<()>;

    async fn load_todos(&self) -> Result<Vec<TodoItem>>;

    async fn save_notes(&self, notes: &[Note]) -> Result<()>;

    async fn load_notes(&self) -> Result<Vec<Note>>;

    /// Saves the selected note; `None` clears the selection
    async fn save_active_note(&self, id: Option<Uuid>) -> Result<()>;

    async fn load_active_note(&self) -> Result<Option<Uuid>>;
}
