/*!
 * Structured script entries and in-memory edit operations.
 *
 * `ScriptEntry` is the parser's output record and the sole contract the SRT
 * generator relies on. `ScriptDocument` wraps the entry list for interactive
 * front-ends, exposing insert/delete/field edits while maintaining the
 * index-contiguity invariant: after every structural change, entry indices
 * form the sequence 1..N with no gaps or duplicates. Violating that
 * invariant corrupts downstream SRT sequence numbering.
 */

use crate::errors::ParseError;

use super::timecode::Timecode;

/// Placeholder narration for rows inserted by hand
const NEW_ENTRY_TEXT: &str = "새 대본 텍스트";

/// One converted script entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    /// Sequential 1-based index, contiguous across the document
    pub index: usize,
    /// Original timecode digit run (e.g. "0036")
    pub timecode_raw: String,
    /// Canonical timecode (e.g. "00:00:36:00"); frames are always zero
    pub timecode_formatted: String,
    /// Absolute offset in milliseconds
    pub timecode_ms: u64,
    /// Stage-direction instructions, joined with ", "
    pub bracket_content: String,
    /// Cleaned narration text; never empty
    pub script_text: String,
}

/// An editable collection of script entries.
#[derive(Debug, Clone, Default)]
pub struct ScriptDocument {
    entries: Vec<ScriptEntry>,
}

impl ScriptDocument {
    /// Wrap a parsed entry list.
    pub fn from_entries(entries: Vec<ScriptEntry>) -> Self {
        let mut doc = ScriptDocument { entries };
        doc.reindex();
        doc
    }

    /// Borrow the entries in order.
    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    /// Consume the document, returning the entry list.
    pub fn into_entries(self) -> Vec<ScriptEntry> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new placeholder entry after `position` (0-based).
    ///
    /// The new entry's timestamp is the previous entry's timestamp plus one
    /// second, or zero when inserting at the front. Returns the insertion
    /// position of the new entry.
    pub fn insert_after(&mut self, position: usize) -> usize {
        let insert_at = (position + 1).min(self.entries.len());

        let new_ms = if insert_at > 0 {
            self.entries[insert_at - 1].timecode_ms + 1000
        } else {
            0
        };

        let hours = new_ms / 3_600_000;
        let minutes = (new_ms % 3_600_000) / 60_000;
        let seconds = (new_ms % 60_000) / 1000;

        self.entries.insert(
            insert_at,
            ScriptEntry {
                index: insert_at + 1,
                timecode_raw: format!("{:02}{:02}", minutes, seconds),
                timecode_formatted: format!("{:02}:{:02}:{:02}:00", hours, minutes, seconds),
                timecode_ms: new_ms,
                bracket_content: String::new(),
                script_text: NEW_ENTRY_TEXT.to_string(),
            },
        );
        self.reindex();

        insert_at
    }

    /// Remove the entry at `position` (0-based).
    pub fn remove(&mut self, position: usize) -> Result<ScriptEntry, ParseError> {
        self.check_position(position)?;
        let removed = self.entries.remove(position);
        self.reindex();
        Ok(removed)
    }

    /// Replace the timecode of the entry at `position` with a new raw digit
    /// run, re-deriving the canonical form and millisecond offset.
    pub fn edit_timecode(&mut self, position: usize, raw: &str) -> Result<(), ParseError> {
        self.check_position(position)?;
        let timecode =
            Timecode::parse(raw).ok_or_else(|| ParseError::InvalidTimecode(raw.to_string()))?;

        let entry = &mut self.entries[position];
        entry.timecode_raw = timecode.raw.clone();
        entry.timecode_formatted = timecode.formatted();
        entry.timecode_ms = timecode.to_ms();
        Ok(())
    }

    /// Replace the narration text of the entry at `position`.
    pub fn edit_text(&mut self, position: usize, text: &str) -> Result<(), ParseError> {
        self.check_position(position)?;
        self.entries[position].script_text = text.to_string();
        Ok(())
    }

    /// Replace the instruction text of the entry at `position`.
    pub fn edit_instructions(&mut self, position: usize, text: &str) -> Result<(), ParseError> {
        self.check_position(position)?;
        self.entries[position].bracket_content = text.to_string();
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<(), ParseError> {
        if position >= self.entries.len() {
            return Err(ParseError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    // Reassign 1-based indices after a structural change
    fn reindex(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.index = i + 1;
        }
    }
}
