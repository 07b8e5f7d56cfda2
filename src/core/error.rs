//! Error taxonomy for rate lookups and form submissions

use thiserror::Error;

/// Discriminant of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Transport,
    Decoding,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Missing API key, detected before any request is made.
    #[error("{0}")]
    Configuration(String),
    /// Bad or missing form input.
    #[error("{0}")]
    Validation(String),
    /// Non-success status or a failed connection.
    #[error("API Request Error: {0}")]
    Transport(String),
    /// Body is not JSON or does not have the expected shape.
    #[error("JSON Decoding Error: {0}")]
    Decoding(String),
    #[error("Unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Configuration(_) => ErrorKind::Configuration,
            ConvertError::Validation(_) => ErrorKind::Validation,
            ConvertError::Transport(_) => ErrorKind::Transport,
            ConvertError::Decoding(_) => ErrorKind::Decoding,
            ConvertError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ConvertError::Configuration(d)
            | ConvertError::Validation(d)
            | ConvertError::Transport(d)
            | ConvertError::Decoding(d)
            | ConvertError::Unexpected(d) => d,
        }
    }
}

impl From<reqwest::Error> for ConvertError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_status() {
            ConvertError::Transport(err.to_string())
        } else if err.is_decode() {
            ConvertError::Decoding(err.to_string())
        } else {
            ConvertError::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Decoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_detail_match_variant() {
        let err = ConvertError::Transport("HTTP error: 503 Service Unavailable".to_string());
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.detail(), "HTTP error: 503 Service Unavailable");
        assert_eq!(
            err.to_string(),
            "API Request Error: HTTP error: 503 Service Unavailable"
        );
    }

    #[test]
    fn configuration_and_validation_display_detail_only() {
        let err = ConvertError::Configuration("API Key is required.".to_string());
        assert_eq!(err.to_string(), "API Key is required.");
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = ConvertError::Validation("Please select a base currency.".to_string());
        assert_eq!(err.to_string(), "Please select a base currency.");
    }

    #[test]
    fn json_errors_become_decoding_errors() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ConvertError = parse_err.into();
        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().starts_with("JSON Decoding Error: "));
    }
}
