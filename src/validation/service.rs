/*!
 * The conversion validator.
 *
 * Two independent checks, both required for an overall pass:
 * - Anchor count: every raw timecode anchor should have produced an entry.
 *   A mismatch means regions were dropped - usually because they carried no
 *   underlined text, or because narration spilled across a page boundary
 *   ahead of its own anchor.
 * - Syllable count: the underlined text of the whole document (derived
 *   independently of region assignment) should reappear verbatim in the
 *   produced entries. A deficit means narration was lost even though the
 *   anchor count matched.
 */

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;

use crate::pdf::ScriptEntry;

use super::syllables::count_syllables;

/// Outcome of one conversion validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionValidationResult {
    /// Raw timecode anchors detected in the document
    pub timecode_original: usize,
    /// Entries actually produced
    pub timecode_converted: usize,
    /// Whether the anchor-count check passed
    pub timecode_match: bool,

    /// Syllables in the document's underlined text
    pub syllable_original: usize,
    /// Syllables in the produced entries' narration
    pub syllable_converted: usize,
    /// Whether the syllable-count check passed
    pub syllable_match: bool,

    /// Overall verdict: both checks passed
    pub is_valid: bool,
}

impl ConversionValidationResult {
    /// Signed entry-count delta (converted minus original).
    pub fn timecode_delta(&self) -> i64 {
        self.timecode_converted as i64 - self.timecode_original as i64
    }

    /// Signed syllable delta (converted minus original); negative means
    /// narration was lost.
    pub fn syllable_delta(&self) -> i64 {
        self.syllable_converted as i64 - self.syllable_original as i64
    }

    /// One-line summary for log output.
    pub fn summary(&self) -> String {
        let tc_mark = if self.timecode_match { "ok" } else { "MISMATCH" };
        let syl_mark = if self.syllable_match { "ok" } else { "MISMATCH" };

        format!(
            "Validation: timecodes {} -> {} ({}{:+}), syllables {} -> {} ({}{:+})",
            self.timecode_original,
            self.timecode_converted,
            tc_mark,
            self.timecode_delta(),
            self.syllable_original,
            self.syllable_converted,
            syl_mark,
            self.syllable_delta(),
        )
    }
}

/// Validator comparing produced entries against independent ground truth.
///
/// A pure function of its inputs; holds no state between calls.
#[derive(Debug, Default)]
pub struct ConversionValidator;

impl ConversionValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        ConversionValidator
    }

    /// Run both checks.
    ///
    /// `underlined_text` must be derived independently of region assignment
    /// (see `PdfScriptParser::underlined_text`); `anchor_count` is the raw
    /// deduplicated anchor count from the parse pass.
    pub fn validate(
        &self,
        underlined_text: &str,
        entries: &[ScriptEntry],
        anchor_count: usize,
    ) -> ConversionValidationResult {
        let timecode_converted = entries.len();
        let timecode_match = anchor_count == timecode_converted;

        let syllable_original = count_syllables(underlined_text);
        let syllable_converted: usize = entries
            .iter()
            .map(|e| count_syllables(&e.script_text))
            .sum();
        let syllable_match = syllable_original == syllable_converted;

        let result = ConversionValidationResult {
            timecode_original: anchor_count,
            timecode_converted,
            timecode_match,
            syllable_original,
            syllable_converted,
            syllable_match,
            is_valid: timecode_match && syllable_match,
        };

        debug!("{}", result.summary());
        result
    }

    /// Render the full plain-text report for a validation result.
    pub fn render_report(
        &self,
        result: &ConversionValidationResult,
        pdf_path: Option<&Path>,
        srt_path: Option<&Path>,
    ) -> String {
        let mut lines: Vec<String> = vec![
            "=".repeat(50),
            "adscribe conversion validation report".to_string(),
            "=".repeat(50),
            String::new(),
            format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        ];

        if let Some(path) = pdf_path {
            lines.push(format!(
                "PDF file: {}",
                path.file_name().map_or_else(
                    || path.display().to_string(),
                    |n| n.to_string_lossy().to_string()
                )
            ));
        }
        if let Some(path) = srt_path {
            lines.push(format!(
                "SRT file: {}",
                path.file_name().map_or_else(
                    || path.display().to_string(),
                    |n| n.to_string_lossy().to_string()
                )
            ));
        }

        lines.extend([
            String::new(),
            "-".repeat(50),
            String::new(),
            "[Timecode check]".to_string(),
            format!("  original:  {}", result.timecode_original),
            format!("  converted: {}", result.timecode_converted),
        ]);

        if result.timecode_match {
            lines.push("  result: match".to_string());
        } else {
            lines.push(format!("  delta: {:+}", result.timecode_delta()));
            lines.push("  result: MISMATCH".to_string());
        }

        lines.extend([
            String::new(),
            "[Syllable check]".to_string(),
            format!("  original:  {}", result.syllable_original),
            format!("  converted: {}", result.syllable_converted),
        ]);

        if result.syllable_match {
            lines.push("  result: match".to_string());
        } else {
            lines.push(format!("  delta: {:+}", result.syllable_delta()));
            lines.push("  result: MISMATCH".to_string());
        }

        lines.extend([
            String::new(),
            "-".repeat(50),
            String::new(),
            format!(
                "Overall: {}",
                if result.is_valid { "PASSED" } else { "FAILED" }
            ),
            String::new(),
            "=".repeat(50),
        ]);

        lines.join("\n")
    }

    /// Render and persist the report next to the converted SRT.
    pub fn save_report(
        &self,
        result: &ConversionValidationResult,
        pdf_path: Option<&Path>,
        srt_path: Option<&Path>,
        report_path: &Path,
    ) -> Result<()> {
        let report = self.render_report(result, pdf_path, srt_path);
        crate::file_utils::FileManager::write_to_file(report_path, &report)
            .with_context(|| format!("Failed to write validation report: {:?}", report_path))
    }
}
