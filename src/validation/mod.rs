/*!
 * Conversion validation for PDF-to-SRT results.
 *
 * This module cross-checks produced entries against independently derived
 * ground truth to catch silent conversion loss:
 * - Anchor-count check: raw timecode anchors vs produced entries
 * - Syllable-count check: underlined text across the document vs the
 *   concatenated narration of all entries
 *
 * # Architecture
 *
 * - `syllables`: the crude syllable-count proxy shared by both sides
 * - `service`: the validator, result type and plain-text report rendering
 *
 * A failed validation is advisory - it flags likely page-boundary data loss
 * for manual review and never aborts the conversion.
 */

pub mod service;
pub mod syllables;

// Re-export main types
pub use service::{ConversionValidationResult, ConversionValidator};
pub use syllables::count_syllables;
