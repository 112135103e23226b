//! Connection settings for the cluster client.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default cluster URL.
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Default timeout for a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings controlling how the client reaches the cluster.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Base URL of the cluster (example: http://localhost:9200).
    pub url: String,

    /// Timeout for a single request.
    pub request_timeout: Duration,

    /// Username for basic authentication.
    pub username: Option<String>,

    /// Password for basic authentication.
    pub password: Option<String>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            username: None,
            password: None,
        }
    }
}

impl ConnectionSettings {
    /// Creates settings for the given URL with default timeouts and no auth.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load settings from environment variables.
    ///
    /// - `ELASTIC_BUNNY_URL` (default `http://localhost:9200`)
    /// - `ELASTIC_BUNNY_TIMEOUT_MS` (default 30000)
    /// - `ELASTIC_BUNNY_USERNAME` / `ELASTIC_BUNNY_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup("ELASTIC_BUNNY_URL").unwrap_or_else(|| DEFAULT_URL.to_string());

        let timeout_ms: Option<u64> = lookup("ELASTIC_BUNNY_TIMEOUT_MS")
            .map(|v| v.parse())
            .transpose()
            .context("ELASTIC_BUNNY_TIMEOUT_MS must be an integer (milliseconds).")?;
        let request_timeout = timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let username = lookup("ELASTIC_BUNNY_USERNAME");
        let password = lookup("ELASTIC_BUNNY_PASSWORD");
        if password.is_some() && username.is_none() {
            anyhow::bail!("ELASTIC_BUNNY_PASSWORD is set but ELASTIC_BUNNY_USERNAME is not.");
        }

        Ok(Self {
            url,
            request_timeout,
            username,
            password,
        })
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("url", &self.url)
            .field("request_timeout", &self.request_timeout)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = ConnectionSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, ConnectionSettings::default());
        assert_eq!(settings.url, "http://localhost:9200");
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = ConnectionSettings::from_lookup(lookup(&[
            ("ELASTIC_BUNNY_URL", "https://search.internal:9243"),
            ("ELASTIC_BUNNY_TIMEOUT_MS", "1500"),
            ("ELASTIC_BUNNY_USERNAME", "elastic"),
            ("ELASTIC_BUNNY_PASSWORD", "changeme"),
        ]))
        .unwrap();

        assert_eq!(
            settings,
            ConnectionSettings::new("https://search.internal:9243")
                .with_request_timeout(Duration::from_millis(1500))
                .with_basic_auth("elastic", "changeme")
        );
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        let err = ConnectionSettings::from_lookup(lookup(&[("ELASTIC_BUNNY_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("ELASTIC_BUNNY_TIMEOUT_MS"));
    }

    #[test]
    fn test_rejects_password_without_username() {
        let result =
            ConnectionSettings::from_lookup(lookup(&[("ELASTIC_BUNNY_PASSWORD", "changeme")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let settings = ConnectionSettings::default().with_basic_auth("elastic", "hunter2");
        let debug = format!("{:?}", settings);
        assert!(debug.contains("elastic"));
        assert!(!debug.contains("hunter2"));
    }
}
