use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP transport failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::TransportError(_) => {
                "Could not reach the Overpass API".to_string()
            }
            FetchError::ParseError(_) => {
                "The Overpass API answered 200 but the body is not valid JSON".to_string()
            }
            FetchError::IoError(e) => format!("Could not write the output file: {}", e),
            FetchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::TransportError(_) => {
                "Check the network connection and that the endpoint is reachable"
            }
            FetchError::ParseError(_) => {
                "The server may be overloaded; try again later or inspect the response with --verbose"
            }
            FetchError::IoError(_) => {
                "Make sure the current directory is writable and the disk is not full"
            }
            FetchError::InvalidConfigValueError { .. } => {
                "Run without arguments to use the built-in defaults"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
