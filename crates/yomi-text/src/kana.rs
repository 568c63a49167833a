//! Kana conversion tables.

use crate::script::{classify, ScriptKind};

/// Full-width forms for U+FF66 (`ｦ`) through U+FF9D (`ﾝ`), in code point order.
const HALF_WIDTH_KATAKANA: [char; 56] = [
    'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー', 'ア', 'イ', 'ウ', 'エ', 'オ',
    'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ',
    'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ',
    'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン',
];

/// Full-width katakana for a half-width katakana letter.
///
/// The half-width voicing marks (`ﾞ`, `ﾟ`) are not letters and return `None`;
/// the normalizer composes them with the preceding kana instead.
pub fn widen_half_width_katakana(c: char) -> Option<char> {
    let offset = (c as u32).checked_sub(0xFF66)?;
    HALF_WIDTH_KATAKANA.get(offset as usize).copied()
}

/// Combining voicing mark equivalent to a half-width or spacing mark.
pub fn combining_voicing_mark(c: char) -> Option<char> {
    match c {
        '\u{FF9E}' | '\u{309B}' | '\u{3099}' => Some('\u{3099}'),
        '\u{FF9F}' | '\u{309C}' | '\u{309A}' => Some('\u{309A}'),
        _ => None,
    }
}

/// Katakana for a hiragana character; anything else is returned as-is.
pub fn hiragana_to_katakana(c: char) -> char {
    match c {
        '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => {
            char::from_u32(c as u32 + 0x60).unwrap_or(c)
        }
        _ => c,
    }
}

/// Convert every hiragana character in `s` to katakana.
pub fn to_katakana(s: &str) -> String {
    s.chars().map(hiragana_to_katakana).collect()
}

/// Full-size katakana for a small katakana (`ァ` → `ア`, `ヵ` → `カ`).
pub fn enlarge_small_katakana(c: char) -> Option<char> {
    match c {
        'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ッ' | 'ャ' | 'ュ' | 'ョ' | 'ヮ' => {
            char::from_u32(c as u32 + 1)
        }
        'ヵ' => Some('カ'),
        'ヶ' => Some('ケ'),
        'ㇰ' => Some('ク'),
        'ㇱ' => Some('シ'),
        'ㇲ' => Some('ス'),
        'ㇳ' => Some('ト'),
        'ㇴ' => Some('ヌ'),
        'ㇵ' => Some('ハ'),
        'ㇶ' => Some('ヒ'),
        'ㇷ' => Some('フ'),
        'ㇸ' => Some('ヘ'),
        'ㇹ' => Some('ホ'),
        'ㇺ' => Some('ム'),
        'ㇻ' => Some('ラ'),
        'ㇼ' => Some('リ'),
        'ㇽ' => Some('ル'),
        'ㇾ' => Some('レ'),
        'ㇿ' => Some('ロ'),
        _ => None,
    }
}

/// Whether every character of `s` is kana (hiragana, katakana, `ー`).
pub fn is_kana(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| matches!(classify(c), ScriptKind::Hiragana | ScriptKind::Katakana))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_width_table_covers_range() {
        assert_eq!(widen_half_width_katakana('ｦ'), Some('ヲ'));
        assert_eq!(widen_half_width_katakana('ｱ'), Some('ア'));
        assert_eq!(widen_half_width_katakana('ｰ'), Some('ー'));
        assert_eq!(widen_half_width_katakana('ﾝ'), Some('ン'));
        assert_eq!(widen_half_width_katakana('ﾞ'), None);
        assert_eq!(widen_half_width_katakana('A'), None);
    }

    #[test]
    fn hiragana_shift() {
        assert_eq!(to_katakana("あいうえお"), "アイウエオ");
        assert_eq!(to_katakana("ゔぁゝゞ"), "ヴァヽヾ");
        assert_eq!(to_katakana("つんく♂"), "ツンク♂");
        assert_eq!(to_katakana("ABC"), "ABC");
    }

    #[test]
    fn small_kana() {
        assert_eq!(enlarge_small_katakana('ァ'), Some('ア'));
        assert_eq!(enlarge_small_katakana('ッ'), Some('ツ'));
        assert_eq!(enlarge_small_katakana('ョ'), Some('ヨ'));
        assert_eq!(enlarge_small_katakana('ヶ'), Some('ケ'));
        assert_eq!(enlarge_small_katakana('ア'), None);
    }

    #[test]
    fn kana_only() {
        assert!(is_kana("オクダタミオ"));
        assert!(is_kana("ひらがなカタカナー"));
        assert!(!is_kana("倖タ"));
        assert!(!is_kana(""));
    }
}
