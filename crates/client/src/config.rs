use reqwest::Url;

use crate::error::ClientError;

/// Default API base, matching the server's default port and `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes API, including the `/api` prefix.
    pub api_url: Url,
}

impl ClientConfig {
    /// Parse and check an API base URL. Only `http` and `https` are accepted.
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        let api_url = Url::parse(api_url.trim()).map_err(|e| ClientError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: api_url.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Self { api_url })
    }
}
