use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid endpoint URL {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unknown field: {0} (expected one of name, gender, age, email, phone)")]
    UnknownField(String),

    #[error("Unknown phone rule: {0} (expected formatted or digits)")]
    UnknownPhoneRule(String),

    #[error("{count} field(s) failed validation")]
    InvalidDraft { count: usize },

    #[error("Submission did not succeed")]
    SubmissionFailed,
}

impl FormError {
    /// Outcomes whose details were already printed by the command itself.
    pub fn is_reported(&self) -> bool {
        matches!(self, FormError::InvalidDraft { .. } | FormError::SubmissionFailed)
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
