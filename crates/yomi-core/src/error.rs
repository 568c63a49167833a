use thiserror::Error;

#[derive(Debug, Error)]
pub enum YomiError {
    #[error("config error: {0}")]
    Config(String),

    #[error("dictionary error: {0}")]
    Dictionary(#[from] yomi_text::TextError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
