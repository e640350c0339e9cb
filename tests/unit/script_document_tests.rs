/*!
 * Unit tests for in-memory entry edit operations
 */

use adscribe::pdf::{ScriptDocument, ScriptEntry};

fn entry(index: usize, ms: u64, text: &str) -> ScriptEntry {
    ScriptEntry {
        index,
        timecode_raw: "0000".to_string(),
        timecode_formatted: "00:00:00:00".to_string(),
        timecode_ms: ms,
        bracket_content: String::new(),
        script_text: text.to_string(),
    }
}

fn assert_contiguous(doc: &ScriptDocument) {
    let got: Vec<usize> = doc.entries().iter().map(|e| e.index).collect();
    let expected: Vec<usize> = (1..=doc.len()).collect();
    assert_eq!(got, expected, "indices must form 1..N");
}

#[test]
fn test_fromEntries_withStaleIndices_shouldReindex() {
    let doc = ScriptDocument::from_entries(vec![
        entry(7, 0, "a"),
        entry(7, 1000, "b"),
        entry(99, 2000, "c"),
    ]);

    assert_contiguous(&doc);
}

#[test]
fn test_randomEditSequence_shouldAlwaysKeepIndicesContiguous() {
    let mut doc = ScriptDocument::from_entries(vec![
        entry(1, 0, "a"),
        entry(2, 10_000, "b"),
        entry(3, 20_000, "c"),
        entry(4, 30_000, "d"),
    ]);

    // a fixed pseudo-random walk of structural edits
    let ops: [(bool, usize); 8] = [
        (true, 3),
        (false, 0),
        (true, 0),
        (true, 4),
        (false, 2),
        (false, 1),
        (true, 1),
        (false, 3),
    ];

    for (insert, pos) in ops {
        if insert {
            doc.insert_after(pos);
        } else if doc.len() > pos {
            doc.remove(pos).unwrap();
        }
        assert_contiguous(&doc);
    }
}

#[test]
fn test_insertAfter_shouldDeriveTimestampFromPredecessor() {
    let mut doc = ScriptDocument::from_entries(vec![entry(1, 36_000, "a"), entry(2, 90_000, "b")]);

    doc.insert_after(1);

    assert_eq!(doc.entries()[2].timecode_ms, 91_000);
    assert_eq!(doc.entries()[2].timecode_formatted, "00:01:31:00");
    assert_contiguous(&doc);
}

#[test]
fn test_editOperations_shouldUpdateSingleEntry() {
    let mut doc = ScriptDocument::from_entries(vec![entry(1, 0, "a"), entry(2, 1000, "b")]);

    doc.edit_text(0, "바뀐 대사").unwrap();
    doc.edit_instructions(1, "바로").unwrap();
    doc.edit_timecode(1, "015628").unwrap();

    assert_eq!(doc.entries()[0].script_text, "바뀐 대사");
    assert_eq!(doc.entries()[1].bracket_content, "바로");
    assert_eq!(doc.entries()[1].timecode_ms, 7_028_000);
    // field edits are not structural; indices unchanged
    assert_contiguous(&doc);
}

#[test]
fn test_editOperations_withBadPosition_shouldFailWithoutChanges() {
    let mut doc = ScriptDocument::from_entries(vec![entry(1, 0, "a")]);

    assert!(doc.edit_text(5, "x").is_err());
    assert!(doc.edit_timecode(5, "0100").is_err());
    assert!(doc.remove(5).is_err());
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.entries()[0].script_text, "a");
}
