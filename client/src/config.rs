//! Client configuration loaded via OrthoConfig.
//!
//! [`ClientSettings`] holds the raw values from CLI arguments, `NEWARA_*`
//! environment variables, and configuration files. [`ClientConfig::resolve`]
//! turns them into validated values once at start-up; consumers receive the
//! resolved config instead of reading the environment themselves.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const PRODUCTION_API_BASE_URL: &str = "https://newara.sparcs.org/api/";
const DEVELOPMENT_API_BASE_URL: &str = "http://localhost:9000/api/";
const PRODUCTION_SOCKET_URL: &str = "wss://newara.sparcs.org/ws";
const DEVELOPMENT_SOCKET_URL: &str = "ws://localhost:9000/ws";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Deployment environment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The public deployment.
    Production,
    /// A backend running on the developer's machine.
    Development,
}

impl Environment {
    /// Environment implied by the build profile: release builds target
    /// production, debug builds target development.
    #[must_use]
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(ConfigError::UnknownEnvironment {
                value: value.to_owned(),
            }),
        }
    }
}

/// Errors raised while resolving client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The environment name is not recognised.
    #[error("unknown environment '{value}': expected 'production' or 'development'")]
    UnknownEnvironment {
        /// Raw environment value.
        value: String,
    },
    /// A configured URL does not parse.
    #[error("invalid {field} '{value}': {message}")]
    InvalidUrl {
        /// Setting that holds the URL.
        field: &'static str,
        /// Raw URL value.
        value: String,
        /// Parser message.
        message: String,
    },
    /// The socket URL does not use a WebSocket scheme.
    #[error("socket URL '{value}' must use ws or wss, found '{scheme}'")]
    InvalidSocketScheme {
        /// Raw URL value.
        value: String,
        /// Scheme found in the URL.
        scheme: String,
    },
    /// The request timeout is zero.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Raw client settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWARA")]
pub struct ClientSettings {
    /// Deployment environment (`production` or `development`); defaults to
    /// the build profile.
    pub environment: Option<String>,
    /// Override for the backend API base URL.
    pub api_base_url: Option<String>,
    /// Override for the notification WebSocket URL.
    pub socket_url: Option<String>,
    /// Per-request timeout in seconds.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            environment: None,
            api_base_url: None,
            socket_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    environment: Environment,
    api_base_url: Url,
    socket_url: Url,
    request_timeout: Duration,
}

impl ClientConfig {
    /// Default configuration for `environment` with no overrides.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; the `Result` mirrors
    /// [`ClientConfig::resolve`].
    pub fn for_environment(environment: Environment) -> Result<Self, ConfigError> {
        Ok(Self {
            environment,
            api_base_url: resolve_api_base_url(environment, None)?,
            socket_url: resolve_socket_url(environment, None)?,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Resolve raw settings into a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown environment, an unparsable URL,
    /// a socket URL without a `ws`/`wss` scheme, or a zero timeout.
    pub fn resolve(settings: &ClientSettings) -> Result<Self, ConfigError> {
        let environment = settings
            .environment
            .as_deref()
            .map_or_else(|| Ok(Environment::from_build()), Environment::from_str)?;
        let request_timeout_secs = settings.request_timeout_secs;
        if request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            environment,
            api_base_url: resolve_api_base_url(environment, settings.api_base_url.as_deref())?,
            socket_url: resolve_socket_url(environment, settings.socket_url.as_deref())?,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    /// Replace the API base URL, normalising it to end with `/`.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: Url) -> Self {
        self.api_base_url = with_trailing_slash(api_base_url);
        self
    }

    /// Replace the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Environment the configuration was resolved for.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Backend API base URL; always ends with `/`.
    #[must_use]
    pub const fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Notification WebSocket URL.
    #[must_use]
    pub const fn socket_url(&self) -> &Url {
        &self.socket_url
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

/// Resolve the notification socket URL.
///
/// An explicit override wins; otherwise production and development each have
/// a fixed default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] when the override does not parse and
/// [`ConfigError::InvalidSocketScheme`] when it is not a `ws`/`wss` URL.
///
/// # Examples
///
/// ```
/// use newara_client::config::{Environment, resolve_socket_url};
///
/// let url = resolve_socket_url(Environment::Production, None).expect("default URL");
/// assert_eq!(url.as_str(), "wss://newara.sparcs.org/ws");
///
/// let url = resolve_socket_url(Environment::Production, Some("ws://127.0.0.1:8000/ws"))
///     .expect("valid override");
/// assert_eq!(url.as_str(), "ws://127.0.0.1:8000/ws");
/// ```
pub fn resolve_socket_url(
    environment: Environment,
    override_url: Option<&str>,
) -> Result<Url, ConfigError> {
    let raw = override_url.unwrap_or(match environment {
        Environment::Production => PRODUCTION_SOCKET_URL,
        Environment::Development => DEVELOPMENT_SOCKET_URL,
    });
    let url = parse_url("socket_url", raw)?;
    match url.scheme() {
        "ws" | "wss" => Ok(url),
        scheme => Err(ConfigError::InvalidSocketScheme {
            value: raw.to_owned(),
            scheme: scheme.to_owned(),
        }),
    }
}

/// Resolve the backend API base URL, normalised to end with `/`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] when the override does not parse.
pub fn resolve_api_base_url(
    environment: Environment,
    override_url: Option<&str>,
) -> Result<Url, ConfigError> {
    let raw = override_url.unwrap_or(match environment {
        Environment::Production => PRODUCTION_API_BASE_URL,
        Environment::Development => DEVELOPMENT_API_BASE_URL,
    });
    parse_url("api_base_url", raw).map(with_trailing_slash)
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|error| ConfigError::InvalidUrl {
        field,
        value: raw.to_owned(),
        message: error.to_string(),
    })
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
