/// Scripted walkthrough of the undo/redo behaviour.
use std::io::Write;

use anyhow::Result;
use linepad_core::Document;

fn show<W: Write>(out: &mut W, doc: &Document<String>) -> Result<()> {
    writeln!(out, "{}", doc.render())?;
    writeln!(out, "Can undo: {}", doc.can_undo())?;
    writeln!(out, "Can redo: {}", doc.can_redo())?;
    Ok(())
}

/// Runs the walkthrough, printing each step and the resulting list.
///
/// # Errors
///
/// Returns an error if writing fails or a scripted position is out of range.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut doc: Document<String> = Document::new();
    writeln!(out, "\n=== LINEPAD UNDO/REDO WALKTHROUGH ===")?;

    writeln!(out, "\nAdding A, B, C")?;
    for text in ["A", "B", "C"] {
        doc.add(text.to_string());
    }
    show(out, &doc)?;

    writeln!(
        out,
        "\nInserting 'A.5' between A and B, then 'B.5' between B and C"
    )?;
    doc.insert_at(1, "A.5".to_string())?;
    doc.insert_at(3, "B.5".to_string())?;
    show(out, &doc)?;

    writeln!(out, "\nUNDO (removes B.5)")?;
    doc.undo();
    show(out, &doc)?;

    writeln!(out, "\nREDO (restores B.5)")?;
    doc.redo();
    show(out, &doc)?;

    writeln!(out, "\nUNDO x3 (leaves A and B)")?;
    for _ in 0..3 {
        doc.undo();
    }
    show(out, &doc)?;

    writeln!(out, "\nREDO x3 (full restore)")?;
    for _ in 0..3 {
        doc.redo();
    }
    show(out, &doc)?;

    writeln!(out, "\nEdit A -> A1, B -> B1")?;
    doc.edit_at(0, "A1".to_string())?;
    doc.edit_at(2, "B1".to_string())?;
    show(out, &doc)?;

    writeln!(out, "\nUNDO x2 (reverts both edits)")?;
    doc.undo();
    doc.undo();
    show(out, &doc)?;

    writeln!(out, "\nInsert X at 1 (drops the undone edits)")?;
    doc.insert_at(1, "X".to_string())?;
    show(out, &doc)?;

    writeln!(out, "\nUNDO (removes X)")?;
    doc.undo();
    show(out, &doc)?;

    writeln!(out, "\nREDO x2 (only X comes back)")?;
    doc.redo();
    doc.redo();
    show(out, &doc)?;

    writeln!(out, "\nUNDO ALL")?;
    doc.undo_all();
    show(out, &doc)?;

    writeln!(out, "\nREDO ALL")?;
    doc.redo_all();
    show(out, &doc)?;

    writeln!(out, "\nAdd an absent element")?;
    doc.add(None);
    show(out, &doc)?;

    writeln!(out, "\nUNDO the absent element")?;
    doc.undo();
    show(out, &doc)?;

    writeln!(out, "\n=== THE END ===\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_runs_to_completion() {
        let mut out = Vec::new();
        run(&mut out).expect("demo");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("List: [0]:A <-> [1]:B\nCan undo: true\nCan redo: true"));
        assert!(text.contains("List is empty\nCan undo: false\nCan redo: true"));
        assert!(text.contains("[6]:(none)"));
        assert!(text.trim_end().ends_with("=== THE END ==="));

        let final_state = "List: [0]:A <-> [1]:X <-> [2]:A.5 <-> [3]:B <-> [4]:B.5 <-> [5]:C\n\
                           Can undo: true\nCan redo: true\n\n=== THE END ===";
        assert!(text.contains(final_state));
    }
}
