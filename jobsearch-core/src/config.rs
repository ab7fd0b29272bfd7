//! Centralized configuration for the job search service.
//!
//! Configuration is read once at startup and never mutated afterwards.
//! Components receive it by reference or through an `Arc`.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use url::Url;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";
/// Environment variable holding the comma-separated CORS origin list.
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";
/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "JSEARCH_BASE_URL";

/// Host identifier of the JSearch provider on RapidAPI.
pub const DEFAULT_PROVIDER_HOST: &str = "jsearch.p.rapidapi.com";

/// Central configuration for all service components.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

/// Upstream provider configuration.
///
/// Controls how the service reaches the third-party job search API.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Provider credential. `None` means the service is unconfigured.
    pub api_key: Option<String>,
    /// Value sent in the provider host header
    pub host: String,
    /// Scheme and authority the search endpoint is resolved against
    pub base_url: Url,
    /// Upper bound on a single upstream call
    pub request_timeout: Duration,
    /// Maximum number of records returned to the caller
    pub max_results: usize,
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("base_url", &self.base_url.as_str())
            .field("request_timeout", &self.request_timeout)
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_PROVIDER_HOST.to_string(),
            base_url: default_base_url(DEFAULT_PROVIDER_HOST),
            request_timeout: Duration::from_secs(30),
            max_results: 20,
        }
    }
}

impl ProviderConfig {
    /// Returns true when a non-empty credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
    /// Cross-origin policy applied to every route
    pub cors: CorsPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8001)),
            cors: CorsPolicy::AllowAny,
        }
    }
}

/// Which cross-origin callers may use the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin is accepted
    AllowAny,
    /// Only the listed origins are accepted
    Origins(Vec<String>),
}

impl CorsPolicy {
    /// Parses a comma-separated origin list.
    ///
    /// Entries are trimmed and empty entries dropped. A `*` entry, or a list
    /// with no usable entries, allows any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            CorsPolicy::AllowAny
        } else {
            CorsPolicy::Origins(origins)
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue { variable: &'static str, reason: String },
}

impl ServiceConfig {
    /// Creates configuration from process environment variables.
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` - An override is present but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// Missing variables fall back to defaults. An empty credential is
    /// treated as absent.
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` - The base URL override cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.provider.api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Some(raw) = lookup(BASE_URL_ENV) {
            config.provider.base_url =
                Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
                    variable: BASE_URL_ENV,
                    reason: e.to_string(),
                })?;
        }

        if let Some(raw) = lookup(CORS_ORIGINS_ENV) {
            config.server.cors = CorsPolicy::parse(&raw);
        }

        Ok(config)
    }

    /// Returns a copy with the given credential, for tests and embedding.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.provider.api_key = Some(api_key.into());
        self
    }

    /// Returns a copy pointing at a different provider endpoint.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.provider.base_url = base_url;
        self
    }
}

fn default_base_url(host: &str) -> Url {
    Url::parse(&format!("https://{host}")).expect("provider host forms a valid URL")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = ServiceConfig::default();

        assert!(!config.provider.is_configured());
        assert_eq!(config.provider.host, "jsearch.p.rapidapi.com");
        assert_eq!(config.provider.base_url.as_str(), "https://jsearch.p.rapidapi.com/");
        assert_eq!(config.provider.request_timeout, Duration::from_secs(30));
        assert_eq!(config.provider.max_results, 20);
        assert_eq!(config.server.bind_address.port(), 8001);
        assert_eq!(config.server.cors, CorsPolicy::AllowAny);
    }

    #[test]
    fn test_lookup_reads_credential_and_origins() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("RAPIDAPI_KEY", "secret"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]))
        .unwrap();

        assert_eq!(config.provider.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.server.cors,
            CorsPolicy::Origins(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn test_empty_credential_is_unconfigured() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("RAPIDAPI_KEY", "  ")])).unwrap();
        assert!(!config.provider.is_configured());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ServiceConfig::from_lookup(lookup_from(&[("JSEARCH_BASE_URL", "not a url")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { variable: "JSEARCH_BASE_URL", .. })
        ));
    }

    #[test]
    fn test_cors_policy_parsing() {
        assert_eq!(CorsPolicy::parse("*"), CorsPolicy::AllowAny);
        assert_eq!(CorsPolicy::parse(""), CorsPolicy::AllowAny);
        assert_eq!(CorsPolicy::parse("https://x.example,*"), CorsPolicy::AllowAny);
        assert_eq!(
            CorsPolicy::parse(" https://x.example ,,"),
            CorsPolicy::Origins(vec!["https://x.example".to_string()])
        );
    }

    #[test]
    fn test_debug_output_redacts_credential() {
        let config = ServiceConfig::default().with_api_key("top-secret");
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
