/// How undo/redo replays a record into the document's element list.
use linepad_list::{DoublyLinkedList, OutOfRange};

use crate::history::{Element, ReplayTarget};

/// The document's live elements, lent to the history during undo/redo.
#[derive(Clone)]
pub(super) struct Elements<T>(pub(super) DoublyLinkedList<T>);

impl<T> Default for Elements<T> {
    fn default() -> Self {
        Self(DoublyLinkedList::new())
    }
}

impl<T> ReplayTarget<T> for Elements<T> {
    /// Which side is absent decides the mutation:
    ///
    /// - nothing to apply: remove (undo an insertion, redo a deletion)
    /// - nothing to replace: insert (redo an insertion, undo a deletion)
    /// - both present: overwrite in place (undo/redo an edit)
    fn apply_replay(
        &mut self,
        position: usize,
        value: Option<Element<T>>,
        counterpart: Option<&Element<T>>,
    ) -> Result<(), OutOfRange> {
        match (value, counterpart) {
            (None, _) => {
                self.0.remove_at(position)?;
            }
            (Some(value), None) => self.0.insert_at(position, value)?,
            (Some(value), Some(_)) => {
                self.0.set(position, value)?;
            }
        }
        Ok(())
    }
}
