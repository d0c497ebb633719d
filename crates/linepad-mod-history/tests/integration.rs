// Integration tests for the history system.
//
// These tests drive an UndoRedoHistory against a real DoublyLinkedList,
// simulating the record-after-mutate pattern a document follows.

use linepad_list::{DoublyLinkedList, OutOfRange};
use linepad_mod_history::{Element, HistoryConfig, HistoryRecord, ReplayTarget, UndoRedoHistory};

/// Minimal document: a list plus the replay policy keyed on which side is absent.
#[derive(Default)]
struct Lines(DoublyLinkedList<String>);

impl ReplayTarget<String> for Lines {
    fn apply_replay(
        &mut self,
        position: usize,
        value: Option<Element<String>>,
        counterpart: Option<&Element<String>>,
    ) -> Result<(), OutOfRange> {
        match (value, counterpart) {
            (None, _) => self.0.remove_at(position).map(drop),
            (Some(value), None) => self.0.insert_at(position, value),
            (Some(value), Some(_)) => self.0.set(position, value).map(drop),
        }
    }
}

fn add(lines: &mut Lines, history: &mut UndoRedoHistory<String>, text: &str) {
    lines.0.append(text.to_string());
    history.record_change(HistoryRecord::insertion(
        lines.0.len() - 1,
        Some(text.to_string()),
    ));
}

fn snapshot(lines: &Lines) -> Vec<String> {
    lines
        .0
        .iter()
        .map(|v| v.cloned().unwrap_or_default())
        .collect()
}

// ── Full Workflow ──────────────────────────────────────────────────────

#[test]
fn test_full_workflow_record_undo_redo() {
    let mut lines = Lines::default();
    let mut history = UndoRedoHistory::default();

    for i in 0..100 {
        add(&mut lines, &mut history, &format!("line{i}"));
    }
    assert_eq!(lines.0.len(), 100);

    for _ in 0..50 {
        assert!(history.undo(&mut lines));
    }
    assert_eq!(lines.0.len(), 50);
    assert_eq!(lines.0.back(), Some(Some(&"line49".to_string())));

    while history.redo(&mut lines) {}
    assert_eq!(lines.0.len(), 100);
    assert_eq!(history.cursor(), Some(99));

    while history.undo(&mut lines) {}
    assert!(lines.0.is_empty());
}

#[test]
fn test_mixed_operations_round_trip() {
    let mut lines = Lines::default();
    let mut history = UndoRedoHistory::default();
    add(&mut lines, &mut history, "A");
    add(&mut lines, &mut history, "B");
    add(&mut lines, &mut history, "C");

    let old = lines.0.set(1, "B1".to_string()).expect("set");
    history.record_change(HistoryRecord::edit(1, old, Some("B1".to_string())));

    let old = lines.0.remove_at(0).expect("remove");
    history.record_change(HistoryRecord::deletion(0, old));
    assert_eq!(snapshot(&lines), vec!["B1", "C"]);

    history.undo(&mut lines);
    assert_eq!(snapshot(&lines), vec!["A", "B1", "C"]);
    history.undo(&mut lines);
    assert_eq!(snapshot(&lines), vec!["A", "B", "C"]);

    history.redo(&mut lines);
    history.redo(&mut lines);
    assert_eq!(snapshot(&lines), vec!["B1", "C"]);
}

// ── Linearity ──────────────────────────────────────────────────────────

#[test]
fn test_branching_after_undo_drops_future() {
    let mut lines = Lines::default();
    let mut history = UndoRedoHistory::default();
    for text in ["A", "B", "C", "D", "E"] {
        add(&mut lines, &mut history, text);
    }

    for k in 1..=5 {
        let mut lines = Lines(lines.0.clone());
        let mut history_k = UndoRedoHistory::default();
        for i in 0..5 {
            let value = lines.0.get(i).expect("get").cloned();
            history_k.record_change(HistoryRecord::insertion(i, value));
        }
        for _ in 0..k {
            history_k.undo(&mut lines);
        }
        add(&mut lines, &mut history_k, "Z");

        assert!(!history_k.can_redo(), "redo survived after {k} undos");
        let before = snapshot(&lines);
        assert!(!history_k.redo(&mut lines));
        assert_eq!(snapshot(&lines), before);
        assert_eq!(history_k.len(), 5 - k + 1);
    }
    assert_eq!(history.len(), 5);
}

// ── Depth cap ──────────────────────────────────────────────────────────

#[test]
fn test_bounded_history_keeps_only_recent_changes() {
    let mut lines = Lines::default();
    let mut history = UndoRedoHistory::new(HistoryConfig::bounded(10));

    for i in 0..25 {
        add(&mut lines, &mut history, &format!("l{i}"));
    }
    assert_eq!(history.len(), 10);

    let mut undone = 0;
    while history.undo(&mut lines) {
        undone += 1;
    }
    assert_eq!(undone, 10);
    assert_eq!(lines.0.len(), 15);
}

// ── Drift ──────────────────────────────────────────────────────────────

#[test]
fn test_replay_against_drifted_target_is_refused() {
    let mut lines = Lines::default();
    let mut history = UndoRedoHistory::default();
    add(&mut lines, &mut history, "A");

    // Mutate behind the history's back so the recorded position no longer exists.
    lines.0.clear();

    assert!(!history.undo(&mut lines));
    assert!(history.can_undo());
    assert_eq!(history.cursor(), Some(0));
}
