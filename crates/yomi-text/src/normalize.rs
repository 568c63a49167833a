//! Width and whitespace folding for comparison.
//!
//! Rewrites a string into the canonical form every later stage works on:
//!
//! 1. Full-width ASCII letters, digits and punctuation fold to ASCII, the
//!    half-width corner brackets and ideographic punctuation fold to their
//!    full-width JIS forms.
//! 2. Half-width katakana fold to full-width katakana, composing a following
//!    voicing mark (`ｶﾞ` → `ガ`). Combining voicing marks compose the same way.
//! 3. Any whitespace, including the ideographic space, becomes U+0020.
//!
//! Hiragana, Greek, Latin diacritics, ideographs and the wave dash `～` pass
//! through untouched. The function is idempotent.

use unicode_normalization::char::compose;

use crate::kana::{combining_voicing_mark, widen_half_width_katakana};

/// Fold `s` into its canonical comparison form.
pub fn normalize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let folded = fold_width(c);

        if let Some(&next) = chars.peek() {
            if let Some(composed) = compose_voicing(folded, next) {
                result.push(composed);
                chars.next();
                continue;
            }
        }

        result.push(folded);
    }

    result
}

/// Fold a single character's width. Voicing marks are handled by the caller.
fn fold_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5D}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{FF61}' => '。',
        '\u{FF62}' => '「',
        '\u{FF63}' => '」',
        '\u{FF64}' => '、',
        '\u{FF65}' => '・',
        '\u{FF9E}' => '\u{309B}', // ﾞ → ゛
        '\u{FF9F}' => '\u{309C}', // ﾟ → ゜
        '\u{FF66}'..='\u{FF9D}' => widen_half_width_katakana(c).unwrap_or(c),
        c if c.is_whitespace() => ' ',
        c => c,
    }
}

/// Compose `base` with a following half-width or combining voicing mark.
///
/// Spacing marks (`゛`, `゜`) already present in the input are left alone so
/// that folding stays idempotent.
fn compose_voicing(base: char, mark: char) -> Option<char> {
    if !matches!(mark, '\u{FF9E}' | '\u{FF9F}' | '\u{3099}' | '\u{309A}') {
        return None;
    }
    compose(base, combining_voicing_mark(mark)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_width_latin() {
        assert_eq!(normalize("ＡＢＣＤＥ"), "ABCDE");
        assert_eq!(normalize("ａｂｃ１２３"), "abc123");
    }

    #[test]
    fn full_width_punctuation() {
        assert_eq!(normalize("（［；！？＃］）"), "([;!?#])");
        assert_eq!(normalize("｢ｶﾀｶﾅ｣"), "「カタカナ」");
    }

    #[test]
    fn ideographic_space() {
        assert_eq!(normalize("福山\u{3000}雅治"), "福山 雅治");
        assert_eq!(normalize("a\u{00A0}b\tc"), "a b c");
    }

    #[test]
    fn half_width_kana() {
        assert_eq!(normalize("ｱｲｳｴｵ"), "アイウエオ");
        assert_eq!(normalize("ｶﾞｷﾞｸﾞ"), "ガギグ");
        assert_eq!(normalize("ﾊﾟﾋﾟﾌﾟ"), "パピプ");
        assert_eq!(normalize("ｳﾞｧｲｵﾘﾝ"), "ヴァイオリン");
        assert_eq!(normalize("ｼﾝﾃﾞｨ･ﾛｰﾊﾟｰ"), "シンディ・ローパー");
    }

    #[test]
    fn stray_voicing_mark() {
        assert_eq!(normalize("ｱﾞ"), "ア゛");
        assert_eq!(normalize("ﾞ"), "゛");
    }

    #[test]
    fn combining_marks_compose() {
        assert_eq!(normalize("カ\u{3099}"), "ガ");
        assert_eq!(normalize("は\u{309A}"), "ぱ");
    }

    #[test]
    fn untouched_scripts() {
        assert_eq!(normalize("あいうえお"), "あいうえお");
        assert_eq!(normalize("αβγ"), "αβγ");
        assert_eq!(normalize("æř"), "æř");
        assert_eq!(normalize("ĆḊÉÁḂ"), "ĆḊÉÁḂ");
        assert_eq!(normalize("亜伊鵜絵尾"), "亜伊鵜絵尾");
        assert_eq!(normalize("夢～ゆめ"), "夢～ゆめ");
    }

    #[test]
    fn idempotent() {
        for s in [
            "ＡＢＣＤＥ",
            "ｱｲｳｴｵ",
            "ｶﾞﾞ",
            "ｱﾞ",
            "あ\u{3099}",
            "The　Alfee",
            "[Disc 3]",
            "つんく♂",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "{s:?}");
        }
    }

    #[test]
    fn empty() {
        assert_eq!(normalize(""), "");
    }
}
