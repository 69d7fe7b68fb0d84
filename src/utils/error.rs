use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    /// Every species upstream failure (404, 5xx, transport) collapses into this.
    #[error("Pokemon '{name}' not found")]
    NotFound { name: String },

    #[error("Malformed species response: {message}")]
    MalformedUpstream { message: String },

    #[error("No English description found")]
    NoEnglishText,

    #[error("No translator registered for style '{style}'")]
    UnknownStyle { style: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PokedexError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
