pub mod dictionary;
pub mod error;
pub mod greek;
pub mod kana;
pub mod normalize;
pub mod punctuation;
pub mod reading;
pub mod script;

pub use dictionary::DictionaryProvider;
pub use error::TextError;
pub use normalize::normalize;
pub use punctuation::strip_reading_punctuation;
pub use reading::{is_japanese_readable, ReadingAnalyzer, ReadingProvider};
pub use script::{classify, ScriptFlags, ScriptKind};
