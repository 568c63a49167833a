//! Code point classification by script.
//!
//! Every other stage of the pipeline asks this module what a character is:
//! the normalizer folds widths based on it, the reading analyzer decides
//! whether a string is Japanese-readable, and the collator derives weight
//! classes from it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Script category of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptKind {
    /// ASCII letters and precomposed Latin letters with diacritics.
    Latin,
    /// ASCII digits `0-9`.
    Digit,
    /// Full-width ASCII variants (`Ａ`, `１`, `！`) and the ideographic space.
    FullWidth,
    /// Half-width katakana and their half-width voicing marks.
    HalfWidthKana,
    Hiragana,
    /// Full-width katakana, including the prolonged sound mark `ー`.
    Katakana,
    /// CJK unified ideographs plus `々`, `〆` and `〇`.
    Ideograph,
    Greek,
    /// Non-spacing combining marks, including the kana voicing marks.
    CombiningMark,
    Whitespace,
    /// Punctuation and symbols, including `・`, `～` and `♂`.
    Symbol,
    /// Anything not covered by the tables above.
    Other,
}

impl ScriptKind {
    /// Hiragana, katakana or half-width katakana.
    pub fn is_kana(self) -> bool {
        matches!(self, Self::Hiragana | Self::Katakana | Self::HalfWidthKana)
    }

    /// Kana or ideograph.
    pub fn is_japanese(self) -> bool {
        self.is_kana() || self == Self::Ideograph
    }

    pub fn flag(self) -> ScriptFlags {
        match self {
            Self::Latin => ScriptFlags::LATIN,
            Self::Digit => ScriptFlags::DIGIT,
            Self::FullWidth => ScriptFlags::FULL_WIDTH,
            Self::HalfWidthKana => ScriptFlags::HALF_WIDTH_KANA,
            Self::Hiragana => ScriptFlags::HIRAGANA,
            Self::Katakana => ScriptFlags::KATAKANA,
            Self::Ideograph => ScriptFlags::IDEOGRAPH,
            Self::Greek => ScriptFlags::GREEK,
            Self::CombiningMark => ScriptFlags::COMBINING_MARK,
            Self::Whitespace => ScriptFlags::WHITESPACE,
            Self::Symbol => ScriptFlags::SYMBOL,
            Self::Other => ScriptFlags::OTHER,
        }
    }
}

bitflags! {
    /// Set of scripts present in a string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScriptFlags: u16 {
        const LATIN = 1 << 0;
        const DIGIT = 1 << 1;
        const FULL_WIDTH = 1 << 2;
        const HALF_WIDTH_KANA = 1 << 3;
        const HIRAGANA = 1 << 4;
        const KATAKANA = 1 << 5;
        const IDEOGRAPH = 1 << 6;
        const GREEK = 1 << 7;
        const COMBINING_MARK = 1 << 8;
        const WHITESPACE = 1 << 9;
        const SYMBOL = 1 << 10;
        const OTHER = 1 << 11;

        const KANA = Self::HALF_WIDTH_KANA.bits() | Self::HIRAGANA.bits() | Self::KATAKANA.bits();
        const JAPANESE = Self::KANA.bits() | Self::IDEOGRAPH.bits();
    }
}

impl ScriptFlags {
    /// Collect the scripts present in `s`.
    pub fn of(s: &str) -> Self {
        s.chars()
            .fold(Self::empty(), |acc, c| acc | classify(c).flag())
    }
}

/// Classify a single code point.
///
/// Total over `char`: unassigned or unknown code points are `Other`.
pub fn classify(c: char) -> ScriptKind {
    match c {
        'a'..='z' | 'A'..='Z' => ScriptKind::Latin,
        '0'..='9' => ScriptKind::Digit,

        // Ideographic space counts as full-width input, not plain whitespace.
        '\u{3000}' => ScriptKind::FullWidth,
        // U+FF5E (～) is the wave dash as typed on Japanese keyboards.
        '\u{FF5E}' => ScriptKind::Symbol,
        '\u{FF01}'..='\u{FF5D}' => ScriptKind::FullWidth,
        '\u{FF61}'..='\u{FF65}' => ScriptKind::Symbol,
        '\u{FF66}'..='\u{FF9F}' => ScriptKind::HalfWidthKana,

        '\u{3041}'..='\u{3096}' | '\u{309B}'..='\u{309F}' => ScriptKind::Hiragana,
        '\u{3099}' | '\u{309A}' => ScriptKind::CombiningMark,
        '\u{30FB}' | '\u{30A0}' => ScriptKind::Symbol,
        '\u{30A1}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => ScriptKind::Katakana,

        '\u{3005}'..='\u{3007}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FA1F}' => ScriptKind::Ideograph,

        '\u{0374}' | '\u{037E}' | '\u{0387}' => ScriptKind::Symbol,
        '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}' => ScriptKind::Greek,

        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}' => ScriptKind::CombiningMark,

        '\u{00D7}' | '\u{00F7}' => ScriptKind::Symbol,
        '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}' => ScriptKind::Latin,

        c if c.is_whitespace() => ScriptKind::Whitespace,
        c if c.is_ascii_punctuation() => ScriptKind::Symbol,

        '\u{00A1}'..='\u{00BF}'
        | '\u{2010}'..='\u{2BFF}'
        | '\u{3001}'..='\u{3004}'
        | '\u{3008}'..='\u{303F}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FFE0}'..='\u{FFEE}' => ScriptKind::Symbol,

        _ => ScriptKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(classify('a'), ScriptKind::Latin);
        assert_eq!(classify('Z'), ScriptKind::Latin);
        assert_eq!(classify('7'), ScriptKind::Digit);
        assert_eq!(classify(' '), ScriptKind::Whitespace);
        assert_eq!(classify('['), ScriptKind::Symbol);
        assert_eq!(classify('-'), ScriptKind::Symbol);
    }

    #[test]
    fn latin_with_diacritics() {
        for c in "ĆḊÉÁḂæř".chars() {
            assert_eq!(classify(c), ScriptKind::Latin, "{c}");
        }
        assert_eq!(classify('×'), ScriptKind::Symbol);
    }

    #[test]
    fn full_width() {
        assert_eq!(classify('Ａ'), ScriptKind::FullWidth);
        assert_eq!(classify('１'), ScriptKind::FullWidth);
        assert_eq!(classify('！'), ScriptKind::FullWidth);
        assert_eq!(classify('\u{3000}'), ScriptKind::FullWidth);
        assert_eq!(classify('～'), ScriptKind::Symbol);
    }

    #[test]
    fn kana() {
        assert_eq!(classify('あ'), ScriptKind::Hiragana);
        assert_eq!(classify('ア'), ScriptKind::Katakana);
        assert_eq!(classify('ー'), ScriptKind::Katakana);
        assert_eq!(classify('ｱ'), ScriptKind::HalfWidthKana);
        assert_eq!(classify('ﾞ'), ScriptKind::HalfWidthKana);
        assert_eq!(classify('・'), ScriptKind::Symbol);
        assert_eq!(classify('\u{3099}'), ScriptKind::CombiningMark);
    }

    #[test]
    fn ideographs() {
        for c in "福山雅治亜々〇".chars() {
            assert_eq!(classify(c), ScriptKind::Ideograph, "{c}");
        }
        assert_eq!(classify('\u{20B9F}'), ScriptKind::Ideograph);
    }

    #[test]
    fn greek_and_symbols() {
        assert_eq!(classify('α'), ScriptKind::Greek);
        assert_eq!(classify('Ω'), ScriptKind::Greek);
        assert_eq!(classify('♂'), ScriptKind::Symbol);
        assert_eq!(classify('「'), ScriptKind::Symbol);
    }

    #[test]
    fn unknown_is_other() {
        assert_eq!(classify('\u{E000}'), ScriptKind::Other);
        assert_eq!(classify('\u{10FFFF}'), ScriptKind::Other);
        assert_eq!(classify('한'), ScriptKind::Other);
    }

    #[test]
    fn flags_of_mixed_string() {
        let flags = ScriptFlags::of("犬とネコ 2");
        assert!(flags.contains(ScriptFlags::IDEOGRAPH | ScriptFlags::HIRAGANA));
        assert!(flags.contains(ScriptFlags::KATAKANA | ScriptFlags::DIGIT));
        assert!(flags.intersects(ScriptFlags::JAPANESE));
        assert!(!flags.contains(ScriptFlags::LATIN));
        assert!(ScriptFlags::of("").is_empty());
    }

    #[test]
    fn kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&ScriptKind::HalfWidthKana).unwrap();
        assert_eq!(json, "\"HalfWidthKana\"");
    }
}
