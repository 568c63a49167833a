//! Decorative punctuation removal for readings.
//!
//! Only ever applied to a reading. Display names and sort strings keep their
//! punctuation.

use crate::script::classify;

/// Symbols that never carry meaning in a reading.
const DECORATIVE: &[char] = &['♂', '♀', '・', '☆', '★', '♪'];

/// Strip decorative symbols and kana word separators from a reading.
///
/// Whitespace survives unless both of its nearest non-space neighbours are
/// Japanese (kana or ideograph), so `シンディ ローパー` joins into one word
/// while `Disc 3` keeps its space. Brackets, hyphens, apostrophes and the
/// wave dash are preserved.
pub fn strip_reading_punctuation(reading: &str) -> String {
    let kept: Vec<char> = reading
        .chars()
        .filter(|c| !DECORATIVE.contains(c))
        .collect();

    let mut result = String::with_capacity(reading.len());
    let mut before: Option<char> = None;
    let mut i = 0;

    while i < kept.len() {
        let c = kept[i];
        if !c.is_whitespace() {
            result.push(c);
            before = Some(c);
            i += 1;
            continue;
        }

        // A whole whitespace run shares the same neighbours.
        let end = kept[i..]
            .iter()
            .position(|c| !c.is_whitespace())
            .map_or(kept.len(), |offset| i + offset);
        if !is_kana_separator(before, kept.get(end).copied()) {
            result.extend(&kept[i..end]);
        }
        i = end;
    }

    result.trim().to_string()
}

fn is_kana_separator(before: Option<char>, after: Option<char>) -> bool {
    match (before, after) {
        (Some(b), Some(a)) => classify(b).is_japanese() && classify(a).is_japanese(),
        _ => false,
    }
}
