use crate::{
    config::HubConfig,
    domain::{Card, Note, TodoItem},
    error::Result,
    storage::Storage,
};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace};
use uuid::Uuid;

/// File-based storage: one JSON document per collection
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const CARDS_FILE: &'static str = "tasks.json";
    const TODOS_FILE: &'static str = "todos.json";
    const NOTES_FILE: &'static str = "notes.json";
    const ACTIVE_NOTE_FILE: &'static str = "active-note.json";

    /// Creates a new FileStorage under the default directory of `project_root`
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self::with_dir(project_root, HubConfig::DEFAULT_STORAGE_DIR)
    }

    /// Creates a new FileStorage under `project_root/dir_name`
    pub fn with_dir(project_root: impl AsRef<Path>, dir_name: &str) -> Self {
        Self {
            root_path: project_root.as_ref().join(dir_name),
        }
    }

    /// Creates a new FileStorage under the directory named by `config`
    pub fn from_config(project_root: impl AsRef<Path>, config: &HubConfig) -> Self {
        Self::with_dir(project_root, &config.storage_dir)
    }

    /// Directory holding the collection files
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn file(&self, name: &str) -> PathBuf {
        self.root_path.join(name)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }

    async fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.file(name), json).await?;
        trace!(file = name, "wrote collection");
        Ok(())
    }

    async fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.file(name);

        if !path.exists() {
            debug!(file = name, "collection not saved yet, using default");
            return Ok(T::default());
        }

        let contents = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists().await?;

        if !self.file(Self::CARDS_FILE).exists() {
            self.save_cards(&[]).await?;
        }

        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.file(Self::CARDS_FILE).exists()
    }

    async fn save_cards(&self, cards: &[Card]) -> Result<()> {
        self.write_json(Self::CARDS_FILE, cards).await
    }

    async fn load_cards(&self) -> Result<Vec<Card>> {
        self.read_json(Self::CARDS_FILE).await
    }

    async fn save_todos(&self, todos: &[TodoItem]) -> Result<()> {
        self.write_json(Self::TODOS_FILE, todos).await
    }

    async fn load_todos(&self) -> Result<Vec<TodoItem>> {
        self.read_json(Self::TODOS_FILE).await
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.write_json(Self::NOTES_FILE, notes).await
    }

    async fn load_notes(&self) -> Result<Vec<Note>> {
        self.read_json(Self::NOTES_FILE).await
    }

    async fn save_active_note(&self, id: Option<Uuid>) -> Result<()> {
        self.write_json(Self::ACTIVE_NOTE_FILE, &id).await
    }

    async fn load_active_note(&self) -> Result<Option<Uuid>> {
        self.read_json(Self::ACTIVE_NOTE_FILE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Lane;
    use crate::error::HubError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_storage_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(!storage.is_initialized().await);

        storage.initialize().await.unwrap();

        assert!(storage.is_initialized().await);
        assert!(storage.root_path().ends_with(".project-hub"));
        assert!(storage.load_cards().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_cards() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let card = Card::new("Keep me", "", Lane::Todo).unwrap();
        storage.save_cards(&[card.clone()]).await.unwrap();
        storage.initialize().await.unwrap();

        assert_eq!(storage.load_cards().await.unwrap(), vec![card]);
    }

    #[tokio::test]
    async fn test_cards_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        let cards = vec![
            Card::new("B", "", Lane::Complete).unwrap(),
            Card::new("A", "details", Lane::Todo).unwrap(),
        ];
        storage.save_cards(&cards).await.unwrap();

        let loaded = storage.load_cards().await.unwrap();
        assert_eq!(loaded, cards);
    }

    #[tokio::test]
    async fn test_missing_collections_load_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(storage.load_todos().await.unwrap().is_empty());
        assert!(storage.load_notes().await.unwrap().is_empty());
        assert!(storage.load_active_note().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_todos_and_notes_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path(), "hub-data");

        let todos = vec![TodoItem::new("water plants").unwrap()];
        let mut note = Note::new();
        note.set_content("first draft");

        storage.save_todos(&todos).await.unwrap();
        storage.save_notes(&[note.clone()]).await.unwrap();
        storage.save_active_note(Some(note.id)).await.unwrap();

        assert!(temp_dir.path().join("hub-data").join("notes.json").exists());
        assert_eq!(storage.load_todos().await.unwrap(), todos);
        assert_eq!(storage.load_notes().await.unwrap(), vec![note.clone()]);
        assert_eq!(storage.load_active_note().await.unwrap(), Some(note.id));

        storage.save_active_note(None).await.unwrap();
        assert!(storage.load_active_note().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_dir_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = HubConfig::from_toml("storage_dir = \".hub\"").unwrap();
        let storage = FileStorage::from_config(temp_dir.path(), &config);

        storage.initialize().await.unwrap();
        assert!(temp_dir.path().join(".hub").join("tasks.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        tokio::fs::write(storage.root_path().join("tasks.json"), "{ not json")
            .await
            .unwrap();

        assert!(matches!(
            storage.load_cards().await,
            Err(HubError::SerializationError(_))
        ));
    }
}
