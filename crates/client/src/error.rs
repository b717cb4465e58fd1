/// Errors from the notes HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("Error {action}: {source}")]
    Request {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status.
    #[error("Error {action}: {status} - {message}")]
    Api {
        action: &'static str,
        status: u16,
        /// The `error` field of the JSON body, or the raw body text.
        message: String,
    },

    /// The configured base URL cannot be used.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status returned by the API, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
