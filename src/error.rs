use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Structurally invalid input such as a dot position outside 1..=6 or an empty word.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown symbol: '{0}'")]
    UnknownSymbol(char),

    /// A search or suggestion was requested before any word list was indexed.
    #[error("no index has been built yet; load a word list first")]
    EmptyIndex,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
