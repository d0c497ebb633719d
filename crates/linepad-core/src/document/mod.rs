//! Document model combining an element list with undo/redo history.
//!
//! A `Document` is the only mutator of both its element list and its
//! history. Each edit performs one list mutation followed by one recorded
//! change; undo and redo replay records through the `replay` submodule and
//! never record anything themselves.

mod replay;

use std::fmt;

use linepad_list::{DoublyLinkedList, OutOfRange};

use crate::history::{HistoryConfig, HistoryRecord, UndoRedoHistory};
use replay::Elements;

/// An editable sequence of elements with linear undo/redo.
///
/// Position arguments are validated by the underlying list only; an
/// `OutOfRange` from the list is returned unchanged and nothing is recorded.
pub struct Document<T> {
    /// The live elements.
    elements: Elements<T>,
    /// Undo/redo history of changes to `elements`.
    history: UndoRedoHistory<T>,
    /// Bumped on every mutation, including undo and redo.
    version: u64,
}

impl<T: fmt::Debug> fmt::Debug for Document<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.elements.0)
            .field("history", &self.history)
            .field("version", &self.version)
            .finish()
    }
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Document<T> {
    /// Creates an empty document with unbounded history.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Creates an empty document whose history follows `config`.
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            elements: Elements::default(),
            history: UndoRedoHistory::new(config),
            version: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.0.is_empty()
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn get(&self, position: usize) -> Result<Option<&T>, OutOfRange> {
        self.elements.0.get(position)
    }

    /// Read-only view of the element list.
    pub fn elements(&self) -> &DoublyLinkedList<T> {
        &self.elements.0
    }

    /// Read-only view of the history.
    pub fn history(&self) -> &UndoRedoHistory<T> {
        &self.history
    }

    /// Monotonic mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forgets all history while keeping the current elements.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<T: Clone> Document<T> {
    /// Appends `value`.
    pub fn add(&mut self, value: impl Into<Option<T>>) {
        let value = value.into();
        self.elements.0.append(value.clone());
        let position = self.len() - 1;
        self.history.record_change(HistoryRecord::insertion(position, value));
        self.bump_version();
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position <= len()`.
    pub fn insert_at(
        &mut self,
        position: usize,
        value: impl Into<Option<T>>,
    ) -> Result<(), OutOfRange> {
        let value = value.into();
        self.elements.0.insert_at(position, value.clone())?;
        self.history.record_change(HistoryRecord::insertion(position, value));
        self.bump_version();
        Ok(())
    }

    /// Overwrites the element at `position` in place.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn edit_at(
        &mut self,
        position: usize,
        value: impl Into<Option<T>>,
    ) -> Result<(), OutOfRange> {
        let value = value.into();
        let old = self.elements.0.set(position, value.clone())?;
        self.history.record_change(HistoryRecord::edit(position, old, value));
        self.bump_version();
        Ok(())
    }

    /// Removes the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `position < len()`.
    pub fn delete_at(&mut self, position: usize) -> Result<(), OutOfRange> {
        let old = self.elements.0.remove_at(position)?;
        self.history.record_change(HistoryRecord::deletion(position, old));
        self.bump_version();
        Ok(())
    }

    /// Reverses the most recent applied change. No-op when there is none.
    pub fn undo(&mut self) {
        if self.history.undo(&mut self.elements) {
            self.bump_version();
        }
    }

    /// Re-applies the most recently undone change. No-op when there is none.
    pub fn redo(&mut self) {
        if self.history.redo(&mut self.elements) {
            self.bump_version();
        }
    }

    /// Undoes until nothing is left to undo.
    pub fn undo_all(&mut self) {
        let mut steps = 0usize;
        while self.history.undo(&mut self.elements) {
            self.bump_version();
            steps += 1;
        }
        tracing::debug!(steps, "Undid all changes");
    }

    /// Redoes until nothing is left to redo.
    pub fn redo_all(&mut self) {
        let mut steps = 0usize;
        while self.history.redo(&mut self.elements) {
            self.bump_version();
            steps += 1;
        }
        tracing::debug!(steps, "Redid all changes");
    }
}

impl<T: PartialEq> Document<T> {
    /// Returns every position, ascending, whose element equals `value`.
    pub fn find(&self, value: Option<&T>) -> Vec<usize> {
        self.elements.0.find(value)
    }
}

impl<T: fmt::Display> Document<T> {
    /// Renders the elements left to right.
    pub fn render(&self) -> String {
        self.elements.0.render()
    }
}

impl<T: fmt::Display> fmt::Display for Document<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
