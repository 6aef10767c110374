use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Todo item not found: {0}")]
    TodoNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("Unknown lane: {0}")]
    UnknownLane(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Storage not initialized. Call initialize() first.")]
    StorageNotInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),
}
