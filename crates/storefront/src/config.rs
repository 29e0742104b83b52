//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! ## Server
//! - `COSMIC_HOST` - Bind address (default: 127.0.0.1)
//! - `COSMIC_PORT` - Listen port (default: 5000)
//! - `COSMIC_STATIC_DIR` - Directory of prebuilt client assets served as a fallback
//!
//! ## Cart storage
//! - `COSMIC_CART_BACKEND` - `memory` (default) or `local`
//! - `COSMIC_CART_DIR` - Directory for the `local` backend (default: .cosmic-delivery)
//!
//! ## Text generation
//! - `OPENAI_API_KEY` - API key; when absent or unusable, pricing runs on the fallback formulas only
//! - `OPENAI_MODEL` - Model ID (default: gpt-4o)
//! - `OPENAI_BASE_URL` - API base URL (default: <https://api.openai.com/v1>)
//! - `GENERATION_TIMEOUT_SECS` - Whole-request timeout (default: 8)
//!
//! ## Error tracking
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: &str = "8";
const DEFAULT_CART_DIR: &str = ".cosmic-delivery";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where session carts live
    pub cart_backend: CartBackendConfig,
    /// Prebuilt client assets served for unmatched paths
    pub static_dir: Option<PathBuf>,
    /// Text-generation settings; `None` when no API key is configured
    pub generation: Option<GenerationConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Cart storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBackendConfig {
    /// Process-lifetime map.
    Memory,
    /// Keyed JSON documents under a local directory.
    Local {
        /// Directory holding one file per storage key.
        dir: PathBuf,
    },
}

/// Text-generation API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GenerationConfig {
    /// API key sent as a bearer token
    pub api_key: SecretString,
    /// Model ID (e.g., gpt-4o)
    pub model: String,
    /// Base URL of an OpenAI-compatible API
    pub base_url: Url,
    /// Whole-request timeout; expiry counts as a failed call
    pub timeout: Duration,
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or the API key looks
    /// like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Lookup(&lookup);

        let host = env
            .or_default("COSMIC_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("COSMIC_HOST".to_string(), e.to_string()))?;
        let port = env
            .or_default("COSMIC_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("COSMIC_PORT".to_string(), e.to_string()))?;

        let cart_backend = match env.or_default("COSMIC_CART_BACKEND", "memory").to_lowercase().as_str() {
            "memory" => CartBackendConfig::Memory,
            "local" => CartBackendConfig::Local {
                dir: PathBuf::from(env.or_default("COSMIC_CART_DIR", DEFAULT_CART_DIR)),
            },
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "COSMIC_CART_BACKEND".to_string(),
                    format!("expected 'memory' or 'local', got '{other}'"),
                ));
            }
        };

        let static_dir = env.optional("COSMIC_STATIC_DIR").map(PathBuf::from);
        let generation = GenerationConfig::from_lookup(&env)?;

        Ok(Self {
            host,
            port,
            cart_backend,
            static_dir,
            generation,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: env.rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GenerationConfig {
    /// Load only the text-generation settings.
    ///
    /// Returns `Ok(None)` when `OPENAI_API_KEY` is unset, blank, a placeholder
    /// or too low in entropy to be a provider-issued key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL or timeout are malformed.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let _ = dotenvy::dotenv();
        let lookup = |key: &str| std::env::var(key).ok();
        Self::from_lookup(&Lookup(&lookup))
    }

    fn from_lookup(env: &Lookup<'_>) -> Result<Option<Self>, ConfigError> {
        let Some(api_key) = env.optional("OPENAI_API_KEY") else {
            return Ok(None);
        };
        if let Err(e) = validate_secret_strength(&api_key, "OPENAI_API_KEY") {
            tracing::warn!(error = %e, "OPENAI_API_KEY unusable, pricing will use fallback formulas only");
            return Ok(None);
        }

        let base_url = Url::parse(&env.or_default("OPENAI_BASE_URL", DEFAULT_BASE_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("OPENAI_BASE_URL".to_string(), e.to_string()))?;
        let timeout_secs = env
            .or_default("GENERATION_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GENERATION_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Some(Self {
            api_key: SecretString::from(api_key),
            model: env.or_default("OPENAI_MODEL", DEFAULT_MODEL),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source shared by the section loaders.
struct Lookup<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Lookup<'_> {
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Get a sample rate in `[0.0, 1.0]`.
    fn rate(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        let Some(raw) = self.optional(key) else {
            return Ok(default);
        };
        let rate = raw
            .parse::<f32>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
        if (0.0..=1.0).contains(&rate) {
            Ok(rate)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("must be between 0.0 and 1.0 (got {rate})"),
            ))
        }
    }
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the key issued by the provider."
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const REAL_LOOKING_KEY: &str = "sk-proj-aB3xY9mK2nL5pQ7rT0uW4zC6";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.cart_backend, CartBackendConfig::Memory);
        assert!(config.generation.is_none());
        assert!(config.static_dir.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blank_api_key_means_fallback_only() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(config.generation.is_none());
    }

    #[test]
    fn test_generation_config_loaded() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", REAL_LOOKING_KEY),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("GENERATION_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        let generation = config.generation.unwrap();
        assert_eq!(generation.model, "gpt-4o-mini");
        assert_eq!(generation.timeout, Duration::from_secs(3));
        assert_eq!(generation.base_url.as_str(), "https://api.openai.com/v1");
    }

    #[test]
    fn test_local_backend_uses_directory() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("COSMIC_CART_BACKEND", "LOCAL"),
            ("COSMIC_CART_DIR", "/tmp/carts"),
        ]))
        .unwrap();
        assert_eq!(
            config.cart_backend,
            CartBackendConfig::Local {
                dir: PathBuf::from("/tmp/carts")
            }
        );
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("COSMIC_CART_BACKEND", "postgres")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("COSMIC_PORT", "99999")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_sample_rate_out_of_range_rejected() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("SENTRY_SAMPLE_RATE", "1.5")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_placeholder_api_key_means_fallback_only() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[(
            "OPENAI_API_KEY",
            "your-openai-key-goes-here",
        )]))
        .unwrap();
        assert!(config.generation.is_none());
    }

    #[test]
    fn test_low_entropy_api_key_means_fallback_only() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[(
            "OPENAI_API_KEY",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        )]))
        .unwrap();
        assert!(config.generation.is_none());
    }

    #[test]
    fn test_low_entropy_api_key_rejected() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_generation_config_debug_redacts_key() {
        let config = GenerationConfig {
            api_key: SecretString::from("super_secret_api_key"),
            model: "gpt-4o".to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            timeout: Duration::from_secs(8),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("gpt-4o"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_api_key"));
    }
}
