/*!
 * Visual line clustering.
 *
 * Words are grouped into lines purely by y-coordinate proximity. Any
 * block/line structure reported by the PDF backend is ignored on purpose:
 * it is unreliable for mixed-language AD scripts. A single sorted pass with
 * a fixed threshold is all the structure this needs.
 */

use super::geometry::{UnderlineSegment, WordBox};

/// Maximum y0 delta for a word to join the current line cluster
pub const Y_LINE_THRESHOLD: f32 = 8.0;

/// Underline strokes sit 0-5 units below the word's bottom edge
const UNDERLINE_MAX_GAP: f32 = 5.0;

/// One clustered visual text line.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// Source page index (0-based)
    pub page: usize,
    /// y-position of the first (topmost) word in the cluster
    pub y: f32,
    /// Line text, words joined left-to-right with single spaces
    pub text: String,
    /// True when any constituent word is underlined
    pub underlined: bool,
}

/// Whether a word has an underline stroke directly beneath it.
///
/// The stroke must be on the same page, lie strictly between 0 and 5 units
/// below the word's bottom edge, and overlap the word's x-span (any overlap,
/// not containment).
fn is_underlined(word: &WordBox, underlines: &[UnderlineSegment]) -> bool {
    underlines.iter().any(|ul| {
        if ul.page != word.page {
            return false;
        }
        let y_diff = ul.y - word.y1;
        y_diff > 0.0 && y_diff < UNDERLINE_MAX_GAP && word.x0 < ul.x1 && word.x1 > ul.x0
    })
}

/// Merge one cluster's words into a `TextLine`.
///
/// Underline strokes are drawn per-phrase, not per-character, so a line
/// counts as underlined when ANY of its words is.
fn merge_line_words(mut words: Vec<&WordBox>, underlines: &[UnderlineSegment]) -> TextLine {
    words.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));

    let text = words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let underlined = words.iter().any(|w| is_underlined(w, underlines));

    TextLine {
        page: words[0].page,
        y: words[0].y0,
        text,
        underlined,
    }
}

/// Cluster all words into visual lines.
///
/// Words are walked in (page, y0, x0) order; a word joins the current
/// cluster while it stays on the same page and within `Y_LINE_THRESHOLD`
/// of the cluster's reference y (the y0 of the cluster's opening word).
pub fn group_words_into_lines(
    words: &[WordBox],
    underlines: &[UnderlineSegment],
) -> Vec<TextLine> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&WordBox> = words.iter().collect();
    sorted.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(a.y0.partial_cmp(&b.y0).unwrap_or(std::cmp::Ordering::Equal))
            .then(a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lines = Vec::new();
    let mut current_words = vec![sorted[0]];
    let mut current_y = sorted[0].y0;
    let mut current_page = sorted[0].page;

    for &word in &sorted[1..] {
        if word.page != current_page || (word.y0 - current_y).abs() >= Y_LINE_THRESHOLD {
            lines.push(merge_line_words(std::mem::take(&mut current_words), underlines));
            current_words.push(word);
            current_y = word.y0;
            current_page = word.page;
        } else {
            current_words.push(word);
        }
    }

    if !current_words.is_empty() {
        lines.push(merge_line_words(current_words, underlines));
    }

    lines
}
