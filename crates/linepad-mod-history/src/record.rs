/// Change records kept by the history.
use std::fmt;

use linepad_list::MISSING_VALUE;

use crate::replay::Direction;

/// One stored element: a list slot's value, which may itself be absent.
pub type Element<T> = Option<T>;

/// The kind of change a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Nothing existed at the position before.
    Insertion,
    /// The element at the position was overwritten in place.
    Edit,
    /// The element at the position was removed.
    Deletion,
}

/// A single reversible change at one position.
///
/// `previous` is `None` for insertions and `new` is `None` for deletions.
/// A record with neither side cannot be constructed. Note that an inserted
/// element may itself be absent: that is `new == Some(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord<T> {
    position: usize,
    previous: Option<Element<T>>,
    new: Option<Element<T>>,
}

impl<T> HistoryRecord<T> {
    /// Records that `value` was inserted at `position`.
    pub fn insertion(position: usize, value: Element<T>) -> Self {
        Self {
            position,
            previous: None,
            new: Some(value),
        }
    }

    /// Records that `previous` at `position` was overwritten with `new`.
    pub fn edit(position: usize, previous: Element<T>, new: Element<T>) -> Self {
        Self {
            position,
            previous: Some(previous),
            new: Some(new),
        }
    }

    /// Records that `previous` was removed from `position`.
    pub fn deletion(position: usize, previous: Element<T>) -> Self {
        Self {
            position,
            previous: Some(previous),
            new: None,
        }
    }

    /// Position the change happened at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Element before the change, `None` for insertions.
    pub fn previous(&self) -> Option<&Element<T>> {
        self.previous.as_ref()
    }

    /// Element after the change, `None` for deletions.
    pub fn new_value(&self) -> Option<&Element<T>> {
        self.new.as_ref()
    }

    pub fn kind(&self) -> ChangeKind {
        match (&self.previous, &self.new) {
            (None, _) => ChangeKind::Insertion,
            (Some(_), None) => ChangeKind::Deletion,
            (Some(_), Some(_)) => ChangeKind::Edit,
        }
    }

    /// Returns `(value_to_apply, counterpart)` for replaying in `direction`.
    ///
    /// Undo applies the previous element against the new one; redo applies
    /// the new element against the previous one.
    pub fn sides(&self, direction: Direction) -> (Option<&Element<T>>, Option<&Element<T>>) {
        match direction {
            Direction::Undo => (self.previous(), self.new_value()),
            Direction::Redo => (self.new_value(), self.previous()),
        }
    }
}

struct ShowElement<'a, T>(&'a Element<T>);

impl<T: fmt::Display> fmt::Display for ShowElement<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(MISSING_VALUE),
        }
    }
}

impl<T: fmt::Display> fmt::Display for HistoryRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.previous, &self.new) {
            (None, Some(new)) => write!(f, "insert @{}: {}", self.position, ShowElement(new)),
            (Some(old), None) => write!(f, "delete @{}: {}", self.position, ShowElement(old)),
            (Some(old), Some(new)) => write!(
                f,
                "edit @{}: {} -> {}",
                self.position,
                ShowElement(old),
                ShowElement(new)
            ),
            (None, None) => unreachable!("history records always carry one side"),
        }
    }
}
