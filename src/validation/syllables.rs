/*!
 * Syllable counting.
 *
 * A "syllable" here is any character surviving after stripping everything
 * that is not a word character or Hangul - a deliberately crude length
 * proxy, not a linguistic syllable count. It only has to be applied
 * identically to both sides of a comparison to make deficits visible.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// Strip whitespace and punctuation; keep word characters and Hangul
static NON_SYLLABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w가-힣]").unwrap());

/// Count the syllable characters in a text.
pub fn count_syllables(text: &str) -> usize {
    NON_SYLLABLE.replace_all(text, "").chars().count()
}
