/// Bounds error shared by every position-taking operation.
use std::fmt;

/// The range a position was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidRange {
    /// Insertion positions: `[0, size]`.
    Insert { size: usize },
    /// Access and removal positions: `[0, size)`.
    Access { size: usize },
}

impl ValidRange {
    /// Whether `position` falls inside this range.
    pub fn contains(&self, position: usize) -> bool {
        match *self {
            Self::Insert { size } => position <= size,
            Self::Access { size } => position < size,
        }
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { size } => write!(f, "[0, {size}]"),
            Self::Access { size } => write!(f, "[0, {size})"),
        }
    }
}

/// A position fell outside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {position} out of range (valid: {valid})")]
pub struct OutOfRange {
    /// The position the caller asked for.
    pub position: usize,
    /// The range that position was checked against.
    pub valid: ValidRange,
}

impl OutOfRange {
    /// Checks `position` against `[0, size]`.
    pub fn check_insert(position: usize, size: usize) -> Result<(), Self> {
        Self::check(position, ValidRange::Insert { size })
    }

    /// Checks `position` against `[0, size)`.
    pub fn check_access(position: usize, size: usize) -> Result<(), Self> {
        Self::check(position, ValidRange::Access { size })
    }

    fn check(position: usize, valid: ValidRange) -> Result<(), Self> {
        if valid.contains(position) {
            Ok(())
        } else {
            Err(Self { position, valid })
        }
    }
}
