//! # Project Hub Core
//!
//! Headless core of the Project Hub dashboard: a kanban board with
//! drag-and-drop reordering, a quick-todo checklist and a notes panel,
//! persisted to a local per-user store.
//!
//! UI shells render from a [`Dashboard`] and feed user actions back into
//! it; they never mutate the collections directly.

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use config::HubConfig;
pub use domain::{
    board::{BoardLayout, BoardStats, LaneDefinition},
    card::{Card, CardId, Lane},
    note::Note,
    todo::{ChecklistProgress, TodoItem},
};
pub use drag::{DragState, RelocationPolicy, ReorderEngine, Target};
pub use error::{HubError, Result};
pub use state::Dashboard;
pub use storage::{file_storage::FileStorage, Storage};
