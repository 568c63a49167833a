//! Dictionary-backed reading provider.
//!
//! The compiled-in table covers common surnames, given names and the words
//! that show up in music catalogs. Installations extend it with a user
//! dictionary file:
//!
//! ```toml
//! [readings]
//! "倖田" = "コウダ"
//! "來未" = "クミ"
//! ```
//!
//! User entries take precedence over compiled-in ones.

use std::collections::HashMap;
use std::path::Path;

use phf::phf_map;
use serde::Deserialize;

use crate::error::TextError;
use crate::kana;
use crate::reading::{ReadingProvider, MAX_TOKEN_CHARS};

/// Compiled-in readings, keyed by surface form.
static BUILTIN_READINGS: phf::Map<&'static str, &'static str> = phf_map! {
    // ── Names ────────────────────────────────────────────────────
    "奥田民生" => "オクダタミオ",
    "奥田" => "オクダ",
    "民生" => "タミオ",
    "福山" => "フクヤマ",
    "雅治" => "マサハル",
    "桑田" => "クワタ",
    "佳祐" => "ケイスケ",
    "宇多田" => "ウタダ",
    "浜崎" => "ハマサキ",
    "安室" => "アムロ",
    "奈美恵" => "ナミエ",
    "椎名" => "シイナ",
    "林檎" => "リンゴ",
    "坂本" => "サカモト",
    "龍一" => "リュウイチ",
    "久石" => "ヒサイシ",
    "美空" => "ミソラ",
    "松任谷" => "マツトウヤ",
    "由実" => "ユミ",
    "竹内" => "タケウチ",
    "山下" => "ヤマシタ",
    "達郎" => "タツロウ",
    "中島" => "ナカジマ",
    "井上" => "イノウエ",
    "陽水" => "ヨウスイ",
    "吉田" => "ヨシダ",
    "拓郎" => "タクロウ",
    "佐藤" => "サトウ",
    "鈴木" => "スズキ",
    "高橋" => "タカハシ",
    "田中" => "タナカ",
    "渡辺" => "ワタナベ",
    "伊藤" => "イトウ",
    "山本" => "ヤマモト",
    "中村" => "ナカムラ",
    "小林" => "コバヤシ",
    "加藤" => "カトウ",
    "山田" => "ヤマダ",
    "松本" => "マツモト",
    "米津" => "ヨネヅ",
    "玄師" => "ケンシ",
    "星野" => "ホシノ",
    "源" => "ゲン",

    // ── Single characters ────────────────────────────────────────
    "亜" => "ア",
    "伊" => "イ",
    "鵜" => "ウ",
    "絵" => "エ",
    "尾" => "オ",
    "田" => "タ",
    "未" => "ヒツジ",
    "犬" => "イヌ",
    "猫" => "ネコ",
    "山" => "ヤマ",
    "川" => "カワ",
    "森" => "モリ",
    "林" => "ハヤシ",
    "愛" => "アイ",
    "夢" => "ユメ",
    "空" => "ソラ",
    "海" => "ウミ",
    "花" => "ハナ",
    "風" => "カゼ",
    "月" => "ツキ",
    "星" => "ホシ",
    "桜" => "サクラ",
    "雪" => "ユキ",
    "雨" => "アメ",
    "歌" => "ウタ",
    "恋" => "コイ",
    "君" => "キミ",
    "僕" => "ボク",
    "私" => "ワタシ",
    "心" => "ココロ",
    "涙" => "ナミダ",
    "青" => "アオ",
    "赤" => "アカ",
    "白" => "シロ",
    "黒" => "クロ",
    "春" => "ハル",
    "夏" => "ナツ",
    "秋" => "アキ",
    "冬" => "フユ",
    "光" => "ヒカリ",
    "声" => "コエ",
    "道" => "ミチ",
    "第" => "ダイ",
    "一" => "イチ",
    "二" => "ニ",
    "三" => "サン",
    "四" => "ヨン",
    "五" => "ゴ",
    "六" => "ロク",
    "七" => "ナナ",
    "八" => "ハチ",
    "九" => "キュウ",
    "十" => "ジュウ",

    // ── Catalog vocabulary ───────────────────────────────────────
    "日本" => "ニホン",
    "東京" => "トウキョウ",
    "大阪" => "オオサカ",
    "京都" => "キョウト",
    "音楽" => "オンガク",
    "交響曲" => "コウキョウキョク",
    "協奏曲" => "キョウソウキョク",
    "組曲" => "クミキョク",
    "序曲" => "ジョキョク",
    "主題歌" => "シュダイカ",
    "挿入歌" => "ソウニュウカ",
    "名曲" => "メイキョク",
    "全集" => "ゼンシュウ",
    "作品集" => "サクヒンシュウ",
    "番外編" => "バンガイヘン",
    "特典" => "トクテン",
    "初回限定盤" => "ショカイゲンテイバン",
    "通常盤" => "ツウジョウバン",
    "限定盤" => "ゲンテイバン",
    "盤" => "バン",
    "曲" => "キョク",
    "集" => "シュウ",
    "話" => "ワ",
    "編" => "ヘン",
    "部" => "ブ",
    "枚目" => "マイメ",
    "作品" => "サクヒン",
    "世界" => "セカイ",
    "未来" => "ミライ",
    "宇宙" => "ウチュウ",
    "青春" => "セイシュン",
    "永遠" => "エイエン",
    "約束" => "ヤクソク",
    "奇跡" => "キセキ",
    "花火" => "ハナビ",
    "桜坂" => "サクラザカ",
    "少年" => "ショウネン",
    "少女" => "ショウジョ",
    "天使" => "テンシ",
    "物語" => "モノガタリ",
};

#[derive(Debug, Deserialize)]
struct UserDictionaryFile {
    #[serde(default)]
    readings: HashMap<String, String>,
}

/// Reading provider over the compiled-in table plus optional user entries.
#[derive(Debug, Clone, Default)]
pub struct DictionaryProvider {
    user: HashMap<String, String>,
}

impl DictionaryProvider {
    /// Provider backed by the compiled-in table only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse a user dictionary from TOML and layer it over the built-in table.
    pub fn from_toml_str(source: &str) -> Result<Self, TextError> {
        let file: UserDictionaryFile =
            toml::from_str(source).map_err(|e| TextError::Parse(e.to_string()))?;

        let mut provider = Self::builtin();
        for (key, reading) in file.readings {
            provider.insert(key, reading)?;
        }
        tracing::debug!(entries = provider.user.len(), "Loaded user dictionary");
        Ok(provider)
    }

    /// Load a user dictionary file and layer it over the built-in table.
    pub fn load(path: &Path) -> Result<Self, TextError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Add or replace a user entry. Hiragana readings are stored as katakana.
    pub fn insert(&mut self, key: String, reading: String) -> Result<(), TextError> {
        let key_len = key.chars().count();
        if key_len == 0 || key_len > MAX_TOKEN_CHARS {
            return Err(TextError::InvalidKey(key));
        }
        if !kana::is_kana(&reading) {
            return Err(TextError::InvalidReading { key, reading });
        }
        self.user.insert(key, kana::to_katakana(&reading));
        Ok(())
    }

    /// Number of user entries.
    pub fn user_entries(&self) -> usize {
        self.user.len()
    }
}

impl ReadingProvider for DictionaryProvider {
    fn resolve_reading(&self, token: &str) -> Option<String> {
        if let Some(reading) = self.user.get(token) {
            return Some(reading.clone());
        }
        BUILTIN_READINGS.get(token).map(|r| (*r).to_string())
    }
}
