use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required columns: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("Unknown query attribute: {0}")]
    UnknownAttribute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed source: {0}")]
    Source(String),
}
