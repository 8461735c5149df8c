use std::{fmt, time::Duration};

use reqwest::Url;

use crate::{Error, Result};

/// Production endpoint of the Decor8 AI API.
pub const DEFAULT_BASE_URL: &str = "https://api.decor8.ai";

/// Settings a client is created with. Once an [`crate::Api`] is built from a config, they
/// cannot change.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Returns a new `ClientConfig` for the given API key, targeting the production API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The Decor8 AI API key sent as a bearer token with every request.
    ///
    /// # Errors
    ///
    /// If the API key is empty or only whitespace, a configuration error is returned.
    pub fn new<S>(api_key: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is not set".to_string()));
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        })
    }

    /// Points the client at a different API host.
    ///
    /// Endpoint paths are appended to the URL as given, so a base URL with a path prefix
    /// (`http://localhost:8080/decor8`) keeps that prefix. A trailing `/` is dropped.
    ///
    /// # Errors
    ///
    /// If the URL fails to parse, a configuration error is returned.
    pub fn with_base_url<S>(mut self, base_url: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        Url::parse(trimmed)
            .map_err(|e| Error::Configuration(format!("invalid base URL {trimmed:?}: {e}")))?;
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Sets the timeout applied to every request, including image downloads.
    ///
    /// Generating designs can take tens of seconds, so keep this generous.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn rejects_empty_api_key() {
        let err = ClientConfig::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let err = ClientConfig::new("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn defaults_to_production() {
        let config = ClientConfig::new("key").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn strips_trailing_slash() {
        let config = ClientConfig::new("key")
            .unwrap()
            .with_base_url("http://localhost:8080/")
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = ClientConfig::new("key")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn debug_hides_api_key() {
        let config = ClientConfig::new("super-secret").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
