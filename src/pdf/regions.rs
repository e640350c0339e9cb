/*!
 * Region assignment.
 *
 * Each timecode anchor owns the vertical span of its page from its own
 * y-position down to the next anchor on the same page. Lines inside the
 * span contribute parenthetical instructions; only underlined lines
 * contribute narration text.
 *
 * A region never crosses a page boundary: when the next anchor sits on a
 * later page the span runs to the end of the page instead. Narration that
 * physically continues onto the next page before its own anchor is lost
 * here; the conversion validator exists to surface exactly that case.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::anchors::TimecodeAnchor;
use super::lines::TextLine;

/// Sound-effect keywords: parentheticals mentioning these are ambience
/// descriptions, not voicing instructions, and are filtered out
pub const SOUND_KEYWORDS: [&str; 8] = [
    "소리", "울음", "웃음", "효과음", "천둥", "한숨", "비명", "신음",
];

/// Lines slightly above the anchor's own y still belong to its region
const REGION_Y_SLACK: f32 = 5.0;

// The timecode label itself, when repeated at the start of a line
static LEADING_TIMECODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4,6}\s*").unwrap());

// A leading parenthetical instruction and the residual line text after it
static LEADING_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(([^)]+)\)\s*(.*)").unwrap());

/// Text accumulated for one timecode region.
#[derive(Debug, Clone, Default)]
pub struct RegionContent {
    /// Instruction captures from parentheticals, in line order
    pub instructions: Vec<String>,
    /// Narration fragments from underlined lines, in line order
    pub narration: Vec<String>,
}

/// Whether a parenthetical capture describes a sound effect.
pub fn is_sound_effect(instruction: &str) -> bool {
    SOUND_KEYWORDS.iter().any(|kw| instruction.contains(kw))
}

/// Strip a leading 4-6 digit timecode run from a line's text.
pub fn strip_leading_timecode(text: &str) -> &str {
    match LEADING_TIMECODE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Assign every line to its anchor's region and accumulate the region's
/// instruction and narration text.
///
/// The returned vector is parallel to `anchors`; regions that collected
/// nothing stay empty (the entry builder drops them).
pub fn assign_regions(anchors: &[TimecodeAnchor], lines: &[TextLine]) -> Vec<RegionContent> {
    let mut regions = Vec::with_capacity(anchors.len());

    for (i, anchor) in anchors.iter().enumerate() {
        // Region ends at the next anchor on the same page, else at page end
        let next_y = match anchors.get(i + 1) {
            Some(next) if next.page == anchor.page => next.y,
            _ => f32::INFINITY,
        };

        let mut content = RegionContent::default();

        for line in lines {
            if line.page != anchor.page {
                continue;
            }
            if line.y < anchor.y - REGION_Y_SLACK || line.y >= next_y - REGION_Y_SLACK {
                continue;
            }

            let text = strip_leading_timecode(&line.text);

            let residual = if let Some(caps) = LEADING_BRACKET.captures(text) {
                let instruction = caps.get(1).map_or("", |m| m.as_str());
                if !is_sound_effect(instruction) {
                    content.instructions.push(instruction.to_string());
                }
                caps.get(2).map_or("", |m| m.as_str()).trim().to_string()
            } else {
                text.to_string()
            };

            // Only underlined lines speak; everything else is stage direction
            if !residual.is_empty() && line.underlined {
                content.narration.push(residual);
            }
        }

        regions.push(content);
    }

    regions
}
