use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry of the quick-todo checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// Creates an open item, or `None` when the text is blank
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Completion summary of a checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded completion percentage, 0 for an empty list
    pub percentage: u8,
}

impl ChecklistProgress {
    pub fn from_items(items: &[TodoItem]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|item| item.completed).count();
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        Self {
            completed,
            total,
            percentage,
        }
    }
}
