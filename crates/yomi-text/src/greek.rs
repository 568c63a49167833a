use phf::phf_map;

/// Katakana names of the Greek letters, keyed by lowercase letter.
static GREEK_READINGS: phf::Map<char, &'static str> = phf_map! {
    'α' => "アルファ",
    'β' => "ベータ",
    'γ' => "ガンマ",
    'δ' => "デルタ",
    'ε' => "イプシロン",
    'ζ' => "ゼータ",
    'η' => "イータ",
    'θ' => "シータ",
    'ι' => "イオタ",
    'κ' => "カッパ",
    'λ' => "ラムダ",
    'μ' => "ミュー",
    'ν' => "ニュー",
    'ξ' => "クサイ",
    'ο' => "オミクロン",
    'π' => "パイ",
    'ρ' => "ロー",
    'σ' => "シグマ",
    'ς' => "シグマ",
    'τ' => "タウ",
    'υ' => "ユプシロン",
    'φ' => "ファイ",
    'χ' => "カイ",
    'ψ' => "プサイ",
    'ω' => "オメガ",
};

/// Phonetic katakana for a Greek letter, either case.
pub fn reading(c: char) -> Option<&'static str> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    GREEK_READINGS.get(&lower).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_letters() {
        assert_eq!(reading('α'), Some("アルファ"));
        assert_eq!(reading('β'), Some("ベータ"));
        assert_eq!(reading('γ'), Some("ガンマ"));
    }

    #[test]
    fn uppercase_maps_like_lowercase() {
        assert_eq!(reading('Ω'), Some("オメガ"));
        assert_eq!(reading('Σ'), Some("シグマ"));
    }

    #[test]
    fn non_letters() {
        assert_eq!(reading('a'), None);
        assert_eq!(reading('ϖ'), None);
    }
}
