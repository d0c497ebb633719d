/// The seam between the history and the structure it replays into.
use std::fmt;

use linepad_list::OutOfRange;

use crate::record::Element;

/// Which way a record is being replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Something a `HistoryRecord` can be replayed against.
///
/// The history never holds a reference to its owner; the owner lends itself
/// as a `ReplayTarget` for the duration of each undo or redo instead.
pub trait ReplayTarget<T> {
    /// Applies one side of a record at `position` without recording anything.
    ///
    /// `value` is the side being applied and `counterpart` the side being
    /// replaced. Either may be `None`, meaning "no element".
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `position` does not fit the target.
    fn apply_replay(
        &mut self,
        position: usize,
        value: Option<Element<T>>,
        counterpart: Option<&Element<T>>,
    ) -> Result<(), OutOfRange>;
}
