// Configuration for the history system.

/// Smallest depth a bounded history may be capped to.
pub const MIN_HISTORY_DEPTH: usize = 1;

/// Configuration for an `UndoRedoHistory`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max records kept per document. The oldest records are evicted once
    /// this is exceeded. `None` keeps every record.
    pub max_depth: Option<usize>,
}

impl HistoryConfig {
    /// A history that never evicts.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// A history capped at `max_depth` records (at least one).
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(MIN_HISTORY_DEPTH)),
        }
    }

    /// The effective cap, with out-of-range values clamped.
    pub(crate) fn depth_limit(&self) -> Option<usize> {
        self.max_depth.map(|depth| depth.max(MIN_HISTORY_DEPTH))
    }
}
