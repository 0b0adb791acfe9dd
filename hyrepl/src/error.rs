use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse format configuration '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },

    #[error("Failed to serialize format configuration for '{file}': {source}")]
    ConfigSerializeError {
        source: toml::ser::Error,
        file: String,
    },
}

pub type ReplResult<T> = Result<T, ReplError>;
