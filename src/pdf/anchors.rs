/*!
 * Timecode anchor detection.
 *
 * Anchors are validated timecode labels located at specific page positions.
 * They delimit narration regions: everything between one anchor's y-position
 * and the next belongs to the earlier cue.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::geometry::WordBox;
use super::timecode::Timecode;

// 4-6 digit runs; longer encodings carry timecodes past the hour mark
static TIMECODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4,6}$").unwrap());

/// A validated timecode anchored at a page position.
#[derive(Debug, Clone)]
pub struct TimecodeAnchor {
    /// Decoded timecode
    pub timecode: Timecode,
    /// Source page index (0-based)
    pub page: usize,
    /// Top edge of the timecode word
    pub y: f32,
    /// Left edge of the timecode word
    pub x: f32,
}

/// Scan all words for timecode labels and produce the ordered,
/// deduplicated anchor list.
///
/// Words matching the digit pattern but failing the range check are
/// coincidental numbers and are skipped silently. Survivors are sorted by
/// (page, y, x); anchors on the same page whose y rounds into the same
/// 10-pixel band collapse to the first one, so a label detected as two
/// adjacent word fragments yields a single anchor.
pub fn detect_anchors(words: &[WordBox]) -> Vec<TimecodeAnchor> {
    let mut anchors: Vec<TimecodeAnchor> = Vec::new();

    for word in words {
        let text = word.text.trim();
        if !TIMECODE_PATTERN.is_match(text) {
            continue;
        }
        if let Some(timecode) = Timecode::parse(text) {
            anchors.push(TimecodeAnchor {
                timecode,
                page: word.page,
                y: word.y0,
                x: word.x0,
            });
        }
    }

    anchors.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut unique: Vec<TimecodeAnchor> = Vec::with_capacity(anchors.len());
    let mut prev_key: Option<(usize, i64)> = None;
    for anchor in anchors {
        let key = (anchor.page, (anchor.y / 10.0).round() as i64);
        if prev_key != Some(key) {
            unique.push(anchor);
            prev_key = Some(key);
        }
    }

    unique
}
