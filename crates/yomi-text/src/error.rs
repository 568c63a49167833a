use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("dictionary parse failed: {0}")]
    Parse(String),

    #[error("dictionary key {0:?} must be 1 to {max} characters", max = crate::reading::MAX_TOKEN_CHARS)]
    InvalidKey(String),

    #[error("reading {reading:?} for {key:?} is not kana")]
    InvalidReading { key: String, reading: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
