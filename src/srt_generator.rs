/*!
 * SRT generation from converted script entries.
 *
 * Each entry becomes one subtitle block: its timestamp is the block start,
 * the next entry's timestamp is the block end (the last block gets a fixed
 * default duration). Narration text is optionally stripped of parenthetical
 * instructions, broken at sentence ends and soft-wrapped to a maximum line
 * length.
 */

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::file_utils::FileManager;
use crate::pdf::ScriptEntry;

// Parenthetical instruction groups inside narration text
static BRACKET_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Sentence ends followed by whitespace become line breaks
static PERIOD_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());

/// Subtitle duration for the final entry, which has no successor
const DEFAULT_DURATION_MS: u64 = 5000;

/// SRT writer over converted script entries.
#[derive(Debug, Clone)]
pub struct SrtGenerator {
    default_duration_ms: u64,
}

impl SrtGenerator {
    /// Create a generator with the default trailing-entry duration.
    pub fn new() -> Self {
        SrtGenerator {
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Create a generator with a custom trailing-entry duration.
    pub fn with_default_duration(default_duration_ms: u64) -> Self {
        SrtGenerator {
            default_duration_ms,
        }
    }

    /// Render the full SRT file content.
    pub fn generate(
        &self,
        entries: &[ScriptEntry],
        max_chars_per_line: usize,
        break_on_period: bool,
        remove_brackets: bool,
    ) -> String {
        let mut blocks = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let start_ms = entry.timecode_ms;
            let end_ms = match entries.get(i + 1) {
                Some(next) => next.timecode_ms,
                None => start_ms + self.default_duration_ms,
            };

            let mut text = entry.script_text.clone();
            if remove_brackets {
                text = BRACKET_GROUPS.replace_all(&text, "").to_string();
                text = WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string();
            }
            let text = Self::format_text(&text, max_chars_per_line, break_on_period);

            blocks.push(format!(
                "{}\n{} --> {}\n{}\n",
                entry.index,
                Self::format_timestamp(start_ms),
                Self::format_timestamp(end_ms),
                text
            ));
        }

        blocks.join("\n")
    }

    /// Persist rendered SRT content.
    pub fn save<P: AsRef<Path>>(&self, content: &str, path: P) -> Result<()> {
        FileManager::write_to_file(path.as_ref(), content)
            .with_context(|| format!("Failed to write SRT file: {:?}", path.as_ref()))
    }

    /// Break narration into display lines.
    ///
    /// Sentence breaks come first when enabled; lines longer than the limit
    /// are then split at the first space or comma once the limit is reached.
    fn format_text(text: &str, max_chars: usize, break_on_period: bool) -> String {
        let text = if break_on_period {
            PERIOD_BREAK.replace_all(text, ".\n").to_string()
        } else {
            text.to_string()
        };

        let mut lines: Vec<String> = Vec::new();
        for line in text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.chars().count() <= max_chars {
                lines.push(line.to_string());
                continue;
            }

            let mut current = String::new();
            let mut current_len = 0usize;
            for ch in line.chars() {
                current.push(ch);
                current_len += 1;
                if current_len >= max_chars && (ch == ' ' || ch == ',') {
                    lines.push(current.trim().to_string());
                    current.clear();
                    current_len = 0;
                }
            }
            if !current.trim().is_empty() {
                lines.push(current.trim().to_string());
            }
        }

        lines.join("\n")
    }

    /// Format a timestamp in milliseconds to SRT form (HH:MM:SS,mmm).
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl Default for SrtGenerator {
    fn default() -> Self {
        Self::new()
    }
}
