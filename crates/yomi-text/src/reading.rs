//! Katakana reading generation.
//!
//! A reading is the phonetic form of a name used as its sort and search key.
//! Generation is best effort and never fails: ideographs the provider cannot
//! resolve stay in the reading as literal characters.

use std::fmt;
use std::sync::Arc;

use crate::dictionary::DictionaryProvider;
use crate::greek;
use crate::kana::{hiragana_to_katakana, to_katakana};
use crate::normalize::normalize;
use crate::script::{classify, ScriptFlags, ScriptKind};

/// Longest token, in characters, offered to a [`ReadingProvider`].
pub const MAX_TOKEN_CHARS: usize = 8;

/// Leading article dropped from non-Japanese readings.
const ENGLISH_ARTICLE: &str = "The ";

/// Source of readings for ideograph tokens.
///
/// Implementations must be cheap to query concurrently once built.
pub trait ReadingProvider: Send + Sync {
    /// Katakana (or hiragana) reading for `token`, or `None` if unknown.
    fn resolve_reading(&self, token: &str) -> Option<String>;
}

/// Whether `s` should be read as Japanese.
///
/// Any kana or ideograph makes a string readable. Otherwise Greek letters and
/// full-width forms count as Japanese-context input as long as half-width
/// Latin letters do not outnumber them. The check runs on the raw input:
/// width folding would erase the full-width signal.
pub fn is_japanese_readable(s: &str) -> bool {
    let mut wide = 0usize;
    let mut latin = 0usize;

    for c in s.chars() {
        match classify(c) {
            ScriptKind::Hiragana
            | ScriptKind::Katakana
            | ScriptKind::HalfWidthKana
            | ScriptKind::Ideograph => return true,
            ScriptKind::Greek | ScriptKind::FullWidth => wide += 1,
            ScriptKind::Latin => latin += 1,
            _ => {}
        }
    }

    wide > 0 && wide >= latin
}

/// `s` minus a leading `"The "`, unless nothing would be left.
fn strip_article(s: &str) -> &str {
    match s.strip_prefix(ENGLISH_ARTICLE) {
        Some(rest) if !rest.trim().is_empty() => rest,
        _ => s,
    }
}

/// Produces katakana readings through a shared [`ReadingProvider`].
#[derive(Clone)]
pub struct ReadingAnalyzer {
    provider: Arc<dyn ReadingProvider>,
}

impl fmt::Debug for ReadingAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadingAnalyzer").finish_non_exhaustive()
    }
}

impl Default for ReadingAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(DictionaryProvider::builtin()))
    }
}

impl ReadingAnalyzer {
    pub fn new(provider: Arc<dyn ReadingProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn ReadingProvider {
        self.provider.as_ref()
    }

    /// Generate the reading of `s`.
    ///
    /// Non-Japanese input comes back normalized, minus a leading `"The "`.
    /// Japanese input has hiragana shifted to katakana, ideographs resolved
    /// through the provider (longest match first), Greek letters spelled out,
    /// and everything else kept literally.
    pub fn create_reading(&self, s: &str) -> String {
        let normalized = normalize(s);

        // Without kana or ideographs the article goes, whatever the width of
        // the input, so a reading fed back in comes out unchanged.
        let text = if ScriptFlags::of(&normalized).intersects(ScriptFlags::JAPANESE) {
            normalized.as_str()
        } else {
            strip_article(&normalized)
        };

        if !is_japanese_readable(s) {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match classify(c) {
                ScriptKind::Ideograph => {
                    if let Some((len, reading)) = self.longest_match(&chars[i..]) {
                        result.push_str(&reading);
                        i += len;
                        continue;
                    }
                    tracing::trace!(ideograph = %c, "No reading resolved, keeping literal");
                    result.push(c);
                }
                ScriptKind::Hiragana => result.push(hiragana_to_katakana(c)),
                ScriptKind::Greek => match greek::reading(c) {
                    Some(reading) => result.push_str(reading),
                    None => result.push(c),
                },
                _ => result.push(c),
            }
            i += 1;
        }

        result
    }

    /// Longest provider match starting at the head of `chars`.
    ///
    /// Windows span ideographs and kana so entries with okurigana can match.
    fn longest_match(&self, chars: &[char]) -> Option<(usize, String)> {
        let span = chars
            .iter()
            .take(MAX_TOKEN_CHARS)
            .take_while(|c| {
                matches!(
                    classify(**c),
                    ScriptKind::Ideograph | ScriptKind::Hiragana | ScriptKind::Katakana
                )
            })
            .count();

        (1..=span).rev().find_map(|len| {
            let token: String = chars[..len].iter().collect();
            self.provider
                .resolve_reading(&token)
                .filter(|reading| !reading.is_empty())
                .map(|reading| (len, to_katakana(&reading)))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeProvider(HashMap<&'static str, &'static str>);

    impl ReadingProvider for FakeProvider {
        fn resolve_reading(&self, token: &str) -> Option<String> {
            self.0.get(token).map(|r| r.to_string())
        }
    }

    fn analyzer() -> ReadingAnalyzer {
        ReadingAnalyzer::default()
    }

    #[test]
    fn readability() {
        assert!(!is_japanese_readable("ABCDE"));
        assert!(!is_japanese_readable("bad communication"));
        assert!(!is_japanese_readable("ĆḊÉÁḂ"));
        assert!(!is_japanese_readable("10"));
        assert!(!is_japanese_readable("[Disc 3]"));
        assert!(!is_japanese_readable(""));
        assert!(is_japanese_readable("ＡＢＣＤＥ"));
        assert!(is_japanese_readable("福山雅治"));
        assert!(is_japanese_readable("犬とネコ"));
        assert!(is_japanese_readable("αβγ"));
        assert!(is_japanese_readable("ｱｲｳ"));
        assert!(is_japanese_readable("Mr.Children の歌"));
    }

    #[test]
    fn latin_dominates_stray_full_width() {
        assert!(!is_japanese_readable("The\u{3000}Alfee"));
        assert!(is_japanese_readable("ＡＢ C"));
    }

    #[test]
    fn kana_readings() {
        let a = analyzer();
        assert_eq!(a.create_reading("あいうえお"), "アイウエオ");
        assert_eq!(a.create_reading("ｱｲｳｴｵ"), "アイウエオ");
        assert_eq!(a.create_reading("つんく♂"), "ツンク♂");
        assert_eq!(a.create_reading("いうえおあ"), "イウエオア");
    }

    #[test]
    fn latin_passthrough() {
        let a = analyzer();
        assert_eq!(a.create_reading("ABCDE"), "ABCDE");
        assert_eq!(a.create_reading("bad communication"), "bad communication");
        assert_eq!(a.create_reading("ＡＢＣＤＥ"), "ABCDE");
        assert_eq!(a.create_reading("ĆḊÉÁḂ"), "ĆḊÉÁḂ");
        assert_eq!(a.create_reading("[Disc 3]"), "[Disc 3]");
    }

    #[test]
    fn leading_article() {
        let a = analyzer();
        assert_eq!(a.create_reading("The Alfee"), "Alfee");
        assert_eq!(a.create_reading("The\u{3000}Alfee"), "Alfee");
        assert_eq!(a.create_reading("the eabcd"), "the eabcd");
        assert_eq!(a.create_reading("Theatre"), "Theatre");
        assert_eq!(a.create_reading("The "), "The ");
    }

    #[test]
    fn full_width_article_stripped() {
        let a = analyzer();
        assert_eq!(a.create_reading("Ｔｈｅ Ａｌｆｅｅ"), "Alfee");
        assert_eq!(a.create_reading("The ＡＢＣ"), "ABC");
        assert_eq!(a.create_reading("The αβγ"), "アルファベータガンマ");
        assert_eq!(a.create_reading("The 奥田"), "The オクダ");
    }

    #[test]
    fn greek_letters() {
        assert_eq!(analyzer().create_reading("αβγ"), "アルファベータガンマ");
    }

    #[test]
    fn dictionary_readings() {
        let a = analyzer();
        assert_eq!(a.create_reading("奥田民生"), "オクダタミオ");
        assert_eq!(a.create_reading("福山雅治"), "フクヤママサハル");
        assert_eq!(a.create_reading("亜伊鵜絵尾"), "アイウエオ");
        assert_eq!(a.create_reading("犬とネコ"), "イヌトネコ");
    }

    #[test]
    fn unresolved_ideographs_pass_through() {
        assert_eq!(analyzer().create_reading("倖田來未"), "倖タ來ヒツジ");
    }

    #[test]
    fn digits_and_ascii_kept_literally() {
        let a = analyzer();
        assert_eq!(a.create_reading("第2期"), "ダイ2期");
        assert_eq!(a.create_reading("B'zのうた"), "B'zノウタ");
    }

    #[test]
    fn wave_dash_kept_in_place() {
        assert_eq!(analyzer().create_reading("夢～ゆめ"), "ユメ～ユメ");
    }

    #[test]
    fn provider_with_okurigana_entry() {
        let provider = FakeProvider(HashMap::from([("見る", "みる"), ("見", "ケン")]));
        let a = ReadingAnalyzer::new(Arc::new(provider));
        assert_eq!(a.create_reading("見る"), "ミル");
        assert_eq!(a.create_reading("見た"), "ケンタ");
    }

    #[test]
    fn empty_provider_degrades_to_literal() {
        let a = ReadingAnalyzer::new(Arc::new(FakeProvider(HashMap::new())));
        assert_eq!(a.create_reading("奥田民生"), "奥田民生");
        assert_eq!(a.create_reading("おくだ"), "オクダ");
    }

    #[test]
    fn idempotent_on_katakana_and_latin() {
        let a = analyzer();
        for s in [
            "あいうえお",
            "奥田民生",
            "αβγ",
            "The Alfee",
            "ABCDE",
            "シンディ ローパー",
            "Ｔｈｅ Ａｌｆｅｅ",
            "The ＡＢＣ",
            "The αβγ",
        ] {
            let once = a.create_reading(s);
            assert_eq!(a.create_reading(&once), once, "{s:?}");
        }
    }
}
