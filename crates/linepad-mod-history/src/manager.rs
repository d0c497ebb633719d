/// Undo/redo history with a cursor over a linked list of records.
///
/// Records before the cursor are reflected in the document; records after it
/// are redoable. Recording a new change discards the redoable tail, so the
/// history always stays linear.
use linepad_list::DoublyLinkedList;

use crate::config::HistoryConfig;
use crate::record::HistoryRecord;
use crate::replay::{Direction, ReplayTarget};

/// Manages undo/redo history for a single document.
pub struct UndoRedoHistory<T> {
    /// Records ordered oldest first.
    records: DoublyLinkedList<HistoryRecord<T>>,
    /// Number of records currently applied. The cursor is `applied - 1`.
    applied: usize,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<T> std::fmt::Debug for UndoRedoHistory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoRedoHistory")
            .field("len", &self.records.len())
            .field("cursor", &self.cursor())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Default for UndoRedoHistory<T> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<T> UndoRedoHistory<T> {
    /// Creates an empty history.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            records: DoublyLinkedList::new(),
            applied: 0,
            config,
        }
    }

    /// Settings this history was created with.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Records a change that has already been applied to the document.
    ///
    /// Discards every redoable record first, then appends `record` and moves
    /// the cursor onto it. Evicts the oldest records if a depth cap is set.
    pub fn record_change(&mut self, record: HistoryRecord<T>) {
        let discarded = self.records.len() - self.applied;
        if discarded > 0 {
            self.records.truncate(self.applied);
            tracing::debug!(discarded, "Discarded redoable history");
        }

        tracing::debug!(
            position = record.position(),
            kind = ?record.kind(),
            "Recorded change"
        );
        self.records.append(record);
        self.applied = self.records.len();

        if let Some(limit) = self.config.depth_limit() {
            let mut evicted = 0;
            while self.records.len() > limit {
                self.records.pop_front();
                evicted += 1;
            }
            if evicted > 0 {
                self.applied -= evicted;
                tracing::debug!(evicted, "Evicted oldest history");
            }
        }
    }

    /// Whether there is an applied record to undo.
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Whether there is an undone record to redo.
    pub fn can_redo(&self) -> bool {
        self.applied < self.records.len()
    }

    /// Index of the last applied record, `None` when nothing is applied.
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Total number of records, applied and redoable.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records oldest first.
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &HistoryRecord<T>> + '_ {
        self.records.iter().flatten()
    }

    /// Forgets every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.applied = 0;
    }
}

impl<T: Clone> UndoRedoHistory<T> {
    /// Reverses the record at the cursor and steps the cursor back.
    ///
    /// Returns `false` without touching anything when there is nothing to
    /// undo or the target rejected the replay.
    pub fn undo<R: ReplayTarget<T>>(&mut self, target: &mut R) -> bool {
        let Some(index) = self.cursor() else {
            return false;
        };
        if !self.replay(index, Direction::Undo, target) {
            return false;
        }
        self.applied -= 1;
        true
    }

    /// Steps the cursor forward and re-applies the record there.
    ///
    /// Returns `false` without touching anything when there is nothing to
    /// redo or the target rejected the replay.
    pub fn redo<R: ReplayTarget<T>>(&mut self, target: &mut R) -> bool {
        if !self.can_redo() {
            return false;
        }
        let index = self.applied;
        if !self.replay(index, Direction::Redo, target) {
            return false;
        }
        self.applied += 1;
        true
    }

    fn replay<R: ReplayTarget<T>>(
        &self,
        index: usize,
        direction: Direction,
        target: &mut R,
    ) -> bool {
        let Ok(Some(record)) = self.records.get(index) else {
            tracing::warn!(index, "History record missing for {direction}");
            return false;
        };

        let (value, counterpart) = record.sides(direction);
        match target.apply_replay(record.position(), value.cloned(), counterpart) {
            Ok(()) => {
                tracing::debug!(index, position = record.position(), "Replayed {direction}");
                true
            }
            Err(e) => {
                tracing::warn!("Failed to {direction} change #{index}: {e}");
                false
            }
        }
    }
}
