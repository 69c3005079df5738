use thiserror::Error;

/// Every way a fetch, a parse or a config access can fail.
#[derive(Error, Debug)]
pub enum AwqatError {
    /// The payload does not have the shape we expect.
    #[error("invalid response: {0}")]
    Validation(String),

    /// The API answered, but with a non-success `code`.
    #[error("API returned error code {code}")]
    Remote { code: i64 },

    #[error("{0}")]
    Transport(TransportFailure),

    /// Reading or writing the persisted user preferences failed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[derive(Error, Debug)]
pub enum TransportFailure {
    #[error("network error: {0}")]
    Network(reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("API request failed with status {0}")]
    Status(u16),
}

impl AwqatError {
    /// True when the failure is about reaching the service at all, as opposed
    /// to the service rejecting the request or answering with garbage.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            AwqatError::Transport(TransportFailure::Network(_) | TransportFailure::Timeout)
        )
    }
}

impl From<reqwest::Error> for AwqatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AwqatError::Transport(TransportFailure::Timeout)
        } else if let Some(status) = err.status() {
            AwqatError::Transport(TransportFailure::Status(status.as_u16()))
        } else if err.is_decode() {
            AwqatError::Validation(err.to_string())
        } else {
            AwqatError::Transport(TransportFailure::Network(err))
        }
    }
}

impl From<serde_json::Error> for AwqatError {
    fn from(err: serde_json::Error) -> Self {
        AwqatError::Validation(err.to_string())
    }
}
