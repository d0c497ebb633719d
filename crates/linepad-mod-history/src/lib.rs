/// Linear undo/redo history.
///
/// Provides an `UndoRedoHistory` that stores `HistoryRecord`s in a
/// `DoublyLinkedList` and replays them against a `ReplayTarget`. Recording a
/// new change after one or more undos discards the redoable records.
pub mod config;
pub mod manager;
pub mod record;
pub mod replay;

pub use config::{HistoryConfig, MIN_HISTORY_DEPTH};
pub use manager::UndoRedoHistory;
pub use record::{ChangeKind, Element, HistoryRecord};
pub use replay::{Direction, ReplayTarget};
