//! Japanese-aware string collation.
//!
//! Keys are compared in three levels. The primary level orders scripts
//! (space, digits, Latin, Greek, symbols, kana, ideographs, everything else)
//! and letters within them, ignoring case, accents, voicing marks and kana
//! size. The secondary level orders accents and voicing marks; the tertiary
//! level orders case, hiragana before katakana, small kana before large and
//! fewer leading zeros before more. Strings equal at every level fall back to
//! code point order, so only identical strings compare equal.

use std::cmp::Ordering;

use unicode_normalization::char::decompose_canonical;
use unicode_normalization::UnicodeNormalization;
use yomi_text::kana::{enlarge_small_katakana, hiragana_to_katakana};
use yomi_text::{classify, normalize, ScriptKind};

/// String comparison used by the comparators.
///
/// Built once and shared; implementations must be safe to call from any thread.
pub trait Collator: Send + Sync {
    fn compare_strings(&self, a: &str, b: &str) -> Ordering;

    /// Like [`compare_strings`](Self::compare_strings), but runs of ASCII digits
    /// compare by numeric value.
    fn compare_numeric(&self, a: &str, b: &str) -> Ordering {
        self.compare_strings(a, b)
    }
}

/// One primary collation element. Variant order is script order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Primary {
    Space,
    /// A digit run in numeric mode: significant digit count, then digits.
    Number { digits: usize, value: String },
    Digit(char),
    Latin(char),
    Greek(char),
    Symbol(char),
    Kana(char),
    Ideograph(char),
    Other(char),
}

/// Precomputed sort key for [`JapaneseCollator`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<Primary>,
    secondary: Vec<u32>,
    tertiary: Vec<u32>,
}

impl CollationKey {
    pub fn primary(&self) -> &[Primary] {
        &self.primary
    }

    fn push(&mut self, primary: Primary, secondary: u32, tertiary: u32) {
        self.primary.push(primary);
        self.secondary.push(secondary);
        self.tertiary.push(tertiary);
    }
}

const TERTIARY_UPPER: u32 = 1;
const TERTIARY_LARGE_KANA: u32 = 1;
const TERTIARY_KATAKANA: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseCollator;

impl JapaneseCollator {
    pub fn new() -> Self {
        Self
    }

    /// Build the collation key of `s`, with digit runs as numbers if `numeric`.
    pub fn collation_key(&self, s: &str, numeric: bool) -> CollationKey {
        let text: Vec<char> = normalize(s).nfc().collect();
        let mut key = CollationKey {
            primary: Vec::with_capacity(text.len()),
            secondary: Vec::with_capacity(text.len()),
            tertiary: Vec::with_capacity(text.len()),
        };

        let mut i = 0;
        while i < text.len() {
            let c = text[i];

            if numeric && c.is_ascii_digit() {
                let run = text[i..].iter().take_while(|c| c.is_ascii_digit()).count();
                let digits: String = text[i..i + run].iter().collect();
                let value = digits.trim_start_matches('0');
                key.primary.push(Primary::Number {
                    digits: value.len(),
                    value: value.to_string(),
                });
                key.secondary.push(0);
                key.tertiary.push((run - value.len()) as u32);
                i += run;
                continue;
            }

            match classify(c) {
                ScriptKind::Whitespace => key.push(Primary::Space, 0, 0),
                ScriptKind::Digit => key.push(Primary::Digit(c), 0, 0),
                ScriptKind::Latin => {
                    let (base, mark) = split_marks(c);
                    key.push(
                        Primary::Latin(lowercase(base)),
                        mark,
                        u32::from(base.is_uppercase()) * TERTIARY_UPPER,
                    );
                }
                ScriptKind::Greek => {
                    let (base, mark) = split_marks(c);
                    key.push(
                        Primary::Greek(lowercase(base)),
                        mark,
                        u32::from(base.is_uppercase()) * TERTIARY_UPPER,
                    );
                }
                ScriptKind::Hiragana | ScriptKind::Katakana | ScriptKind::HalfWidthKana => {
                    let katakana = hiragana_to_katakana(c);
                    let (base, mark) = split_marks(katakana);
                    let (base, size) = match enlarge_small_katakana(base) {
                        Some(large) => (large, 0),
                        None => (base, TERTIARY_LARGE_KANA),
                    };
                    let script = if katakana == c { TERTIARY_KATAKANA } else { 0 };
                    key.push(Primary::Kana(base), mark, size | script);
                }
                ScriptKind::CombiningMark => match key.secondary.last_mut() {
                    Some(last) => *last = last.saturating_add(c as u32),
                    None => key.push(Primary::Symbol(c), 0, 0),
                },
                ScriptKind::Ideograph => key.push(Primary::Ideograph(c), 0, 0),
                ScriptKind::Symbol => key.push(Primary::Symbol(c), 0, 0),
                ScriptKind::FullWidth | ScriptKind::Other => key.push(Primary::Other(c), 0, 0),
            }
            i += 1;
        }

        key
    }

    fn compare(&self, a: &str, b: &str, numeric: bool) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.collation_key(a, numeric)
            .cmp(&self.collation_key(b, numeric))
            .then_with(|| a.cmp(b))
    }
}

impl Collator for JapaneseCollator {
    fn compare_strings(&self, a: &str, b: &str) -> Ordering {
        self.compare(a, b, false)
    }

    fn compare_numeric(&self, a: &str, b: &str) -> Ordering {
        self.compare(a, b, true)
    }
}

/// Base character and summed combining marks of `c`'s canonical decomposition.
fn split_marks(c: char) -> (char, u32) {
    let mut base = None;
    let mut marks = 0u32;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        } else {
            marks = marks.saturating_add(d as u32);
        }
    });
    (base.unwrap_or(c), marks)
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(items: &[&str], numeric: bool) -> Vec<String> {
        let collator = JapaneseCollator::new();
        let mut v: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| {
            if numeric {
                collator.compare_numeric(a, b)
            } else {
                collator.compare_strings(a, b)
            }
        });
        v
    }

    #[test]
    fn test_script_order() {
        assert_eq!(
            sorted(&["ア", "亜", "#", "b", "1", "α", " "], false),
            vec![" ", "1", "b", "α", "#", "ア", "亜"]
        );
    }

    #[test]
    fn test_lexicographic_digits() {
        assert_eq!(
            sorted(&["episode 2", "episode 19", "episode 1"], false),
            vec!["episode 1", "episode 19", "episode 2"]
        );
    }

    #[test]
    fn test_numeric_digits() {
        assert_eq!(
            sorted(&["episode 2", "episode 19", "episode 1"], true),
            vec!["episode 1", "episode 2", "episode 19"]
        );
        assert_eq!(sorted(&["100", "99", "010", "10"], true), vec!["10", "010", "99", "100"]);
    }

    #[test]
    fn test_case_and_accents_are_secondary() {
        assert_eq!(
            sorted(&["DEABC", "ĆḊÉÁḂ", "abcde", "BCDEA"], false),
            vec!["abcde", "BCDEA", "ĆḊÉÁḂ", "DEABC"]
        );
        assert_eq!(sorted(&["B", "b"], false), vec!["b", "B"]);
        assert_eq!(sorted(&["é", "e"], false), vec!["e", "é"]);
    }

    #[test]
    fn test_kana_levels() {
        assert_eq!(sorted(&["カ", "ガ", "か"], false), vec!["か", "カ", "ガ"]);
        assert_eq!(sorted(&["ア", "ァ"], false), vec!["ァ", "ア"]);
        assert_eq!(sorted(&["ガイ", "カウ"], false), vec!["ガイ", "カウ"]);
    }

    #[test]
    fn test_width_folded_before_compare() {
        let c = JapaneseCollator::new();
        assert_eq!(
            c.collation_key("ＢＣＤＥＡ", false),
            c.collation_key("BCDEA", false)
        );
        assert_eq!(c.compare_strings("ＢＣＤＥＡ", "BCDEA"), "ＢＣＤＥＡ".cmp("BCDEA"));
    }

    #[test]
    fn test_total_order() {
        let c = JapaneseCollator::new();
        assert_eq!(c.compare_strings("abc", "abc"), Ordering::Equal);
        assert_ne!(c.compare_strings("ｱ", "ア"), Ordering::Equal);
        assert_ne!(c.compare_numeric("01", "1"), Ordering::Equal);
    }
}
