pub mod board;
pub mod card;
pub mod note;
pub mod todo;

pub use board::{BoardLayout, BoardStats, LaneDefinition};
pub use card::{Card, CardId, Lane};
pub use note::Note;
pub use todo::{ChecklistProgress, TodoItem};
