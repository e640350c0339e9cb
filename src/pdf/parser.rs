/*!
 * The PDF script parser.
 *
 * One parse is a single synchronous pass: collect geometry, detect timecode
 * anchors, cluster lines, assign regions, build entries. Every invocation
 * rebuilds its word/underline/anchor/line lists from scratch; there is no
 * shared state between parses.
 *
 * `underlined_text` re-derives the validation ground truth with its own
 * geometry pass and never reuses region assignment, so the conversion
 * validator can catch region bugs instead of echoing them.
 */

use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;

use super::anchors;
use super::entry::ScriptEntry;
use super::geometry::{DocumentGeometry, GeometrySource, PdfiumGeometrySource};
use super::lines;
use super::regions::{self, RegionContent};
use super::timecode::Timecode;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// All parenthetical groups, for the independent ground-truth derivation
static ANY_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)\s*").unwrap());

/// Options controlling narration text cleanup.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Replace "/" pause marks with spaces
    pub remove_slashes: bool,
    /// Replace "." with spaces
    pub remove_periods: bool,
    /// Prefix the narration with "(instructions) " when instructions exist
    pub include_brackets: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            remove_slashes: true,
            remove_periods: false,
            include_brackets: false,
        }
    }
}

/// The result of one parse pass.
#[derive(Debug, Clone, Default)]
pub struct ParsedScript {
    /// Converted entries, indexed 1..N
    pub entries: Vec<ScriptEntry>,
    /// Raw deduplicated anchor count, before region dropping.
    /// The conversion validator compares this against the entry count.
    pub anchor_count: usize,
}

/// Geometry-driven audio-description script parser.
pub struct PdfScriptParser {
    source: Box<dyn GeometrySource>,
}

impl PdfScriptParser {
    /// Create a parser backed by the pdfium geometry source.
    pub fn new() -> Self {
        Self::with_source(Box::new(PdfiumGeometrySource::new()))
    }

    /// Create a parser over a custom geometry source.
    pub fn with_source(source: Box<dyn GeometrySource>) -> Self {
        PdfScriptParser { source }
    }

    /// Parse a script PDF into structured entries.
    ///
    /// A document without any timecode anchors yields an empty, successful
    /// result: zero AD content is not an error. A PDF that cannot be opened
    /// fails fatally with no partial output.
    pub fn parse(&self, pdf_path: &Path, options: &ParseOptions) -> Result<ParsedScript, ParseError> {
        let geometry = self.source.collect(pdf_path)?;
        Ok(self.parse_geometry(&geometry, options))
    }

    /// Parse pre-collected geometry. Exposed separately so the clustering
    /// and region logic can run against fixture geometry.
    pub fn parse_geometry(&self, geometry: &DocumentGeometry, options: &ParseOptions) -> ParsedScript {
        let anchors = anchors::detect_anchors(&geometry.words);
        if anchors.is_empty() {
            debug!("No timecode anchors found in document");
            return ParsedScript::default();
        }

        let lines = lines::group_words_into_lines(&geometry.words, &geometry.underlines);
        let regions = regions::assign_regions(&anchors, &lines);

        let mut entries = Vec::new();
        for (anchor, region) in anchors.iter().zip(&regions) {
            if let Some(entry) =
                Self::build_entry(entries.len() + 1, &anchor.timecode, region, options)
            {
                entries.push(entry);
            }
        }

        debug!(
            "Parsed {} entries from {} anchors across {} pages",
            entries.len(),
            anchors.len(),
            geometry.page_count
        );

        ParsedScript {
            entries,
            anchor_count: anchors.len(),
        }
    }

    /// Assemble one region's entry, or `None` when the region has no
    /// narration after cleaning (stage-direction-only regions drop out here).
    fn build_entry(
        index: usize,
        timecode: &Timecode,
        region: &RegionContent,
        options: &ParseOptions,
    ) -> Option<ScriptEntry> {
        if region.narration.is_empty() {
            return None;
        }

        let bracket_content = region.instructions.join(", ");
        let mut script_text = region.narration.join(" ");

        if options.remove_slashes {
            script_text = script_text.replace('/', " ");
        }
        if options.remove_periods {
            script_text = script_text.replace('.', " ");
        }
        if options.include_brackets && !bracket_content.is_empty() {
            script_text = format!("({}) {}", bracket_content, script_text);
        }

        let script_text = collapse_whitespace(&script_text);
        if script_text.is_empty() {
            return None;
        }

        Some(ScriptEntry {
            index,
            timecode_raw: timecode.raw.clone(),
            timecode_formatted: timecode.formatted(),
            timecode_ms: timecode.to_ms(),
            bracket_content,
            script_text,
        })
    }

    /// Extract every underlined line's text across the whole document,
    /// ignoring page boundaries and timecode regions.
    ///
    /// This is the validation ground truth: a line counts as soon as any of
    /// its words is underlined, each line is stripped of a leading timecode
    /// run and of all parenthetical groups, and the remainders are joined
    /// with spaces.
    pub fn underlined_text(&self, pdf_path: &Path) -> Result<String, ParseError> {
        let geometry = self.source.collect(pdf_path)?;
        Ok(Self::underlined_text_from_geometry(&geometry))
    }

    /// Ground-truth derivation over pre-collected geometry.
    pub fn underlined_text_from_geometry(geometry: &DocumentGeometry) -> String {
        let lines = lines::group_words_into_lines(&geometry.words, &geometry.underlines);

        let mut fragments: Vec<String> = Vec::new();
        for line in &lines {
            if !line.underlined {
                continue;
            }
            let text = regions::strip_leading_timecode(&line.text);
            let text = ANY_BRACKET.replace_all(text, "");
            let text = text.trim();
            if !text.is_empty() {
                fragments.push(text.to_string());
            }
        }

        collapse_whitespace(&fragments.join(" "))
    }

    /// Number of pages in the document.
    pub fn page_count(&self, pdf_path: &Path) -> Result<usize, ParseError> {
        Ok(self.source.collect(pdf_path)?.page_count)
    }
}

impl Default for PdfScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace runs to single spaces and trim. Idempotent.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text, " ").trim().to_string()
}
