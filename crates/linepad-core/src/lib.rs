/// Editable sequence with linear undo/redo.
///
/// A `Document` owns a `DoublyLinkedList` of elements and an
/// `UndoRedoHistory` of the changes made to it. Every edit records exactly
/// one history record; undo and redo replay records without recording.
pub mod document;
pub mod history;

pub use document::Document;
pub use linepad_list::{DoublyLinkedList, OutOfRange, ValidRange};
