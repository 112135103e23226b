//! Error types for cluster requests.

use bunny_names::NameError;
use thiserror::Error;

/// Errors that can occur when talking to the cluster.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The index name failed validation; no request was sent.
    #[error(transparent)]
    InvalidName(#[from] NameError),

    /// The configured cluster URL cannot be used as a base URL.
    #[error("invalid cluster URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body could not be encoded; no request was sent.
    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The cluster answered with a status the operation does not expect.
    #[error("unexpected status {status} for index '{index}'")]
    UnexpectedStatus { index: String, status: u16 },

    /// The cluster rejected the request.
    #[error("cluster rejected request for index '{index}' with status {status}: {body}")]
    Rejected {
        index: String,
        status: u16,
        body: String,
    },
}

impl ClientError {
    /// Returns true if the request was never sent because the name was invalid.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, ClientError::InvalidName(_))
    }

    /// Returns the HTTP status code, if the cluster answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { status, .. } | ClientError::Rejected { status, .. } => {
                Some(*status)
            }
            ClientError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::from(source);
        assert!(matches!(err, ClientError::Serialization(_)));
        assert!(!err.is_invalid_name());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("failed to encode request body"));
    }
}
