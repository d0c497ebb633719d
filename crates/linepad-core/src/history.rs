// Re-exports from linepad-mod-history.
// Keeps the document module independent of the history crate's layout.
pub use linepad_mod_history::{
    ChangeKind, Direction, Element, HistoryConfig, HistoryRecord, ReplayTarget, UndoRedoHistory,
};
