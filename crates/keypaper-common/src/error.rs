use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyPaperError {
    /// Any transport, status or decode failure while talking to the works API.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Invalid year range: {from} is after {to}")]
    InvalidYearRange { from: i32, to: i32 },

    #[error("Security error: {0}")]
    Security(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for KeyPaperError {
    fn from(err: reqwest::Error) -> Self {
        KeyPaperError::Network(err.to_string())
    }
}

impl From<csv::Error> for KeyPaperError {
    fn from(err: csv::Error) -> Self {
        KeyPaperError::Export(err.to_string())
    }
}

impl KeyPaperError {
    /// True for failures that happen before any request is sent.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, KeyPaperError::EmptyQuery | KeyPaperError::InvalidYearRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, KeyPaperError>;
