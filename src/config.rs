//! Runtime configuration for link building.
//!
//! Configuration is built in code or read from the environment:
//!
//! - `WATERCOOLER_SECRET`: secret used to sign channel tokens (required)
//! - `WATERCOOLER_SERVER`: host and port of the realtime server (required)
//! - `WATERCOOLER_SECURE`: whether the realtime server uses TLS (optional,
//!   defaults to `false`)
//! - `SCRUMBOARD_API_PREFIX`: mount point of the board API (optional,
//!   defaults to `/api`)

use crate::board::adapters::DEFAULT_API_PREFIX;
use std::fmt;
use thiserror::Error;

/// Environment variable holding the channel signing secret.
pub const SECRET_ENV: &str = "WATERCOOLER_SECRET";
/// Environment variable holding the realtime server address.
pub const SERVER_ENV: &str = "WATERCOOLER_SERVER";
/// Environment variable selecting `wss` over `ws`.
pub const SECURE_ENV: &str = "WATERCOOLER_SECURE";
/// Environment variable overriding the API prefix.
pub const API_PREFIX_ENV: &str = "SCRUMBOARD_API_PREFIX";

const DEFAULT_CHANNEL_SERVER: &str = "localhost:8080";

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A boolean variable holds an unrecognized value.
    #[error("invalid boolean '{value}' for {name}, expected true/false, yes/no or 1/0")]
    InvalidFlag {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Realtime channel settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    secret: String,
    server: String,
    secure: bool,
}

impl ChannelConfig {
    /// Creates a plain (`ws`) channel configuration.
    #[must_use]
    pub fn new(secret: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            server: server.into(),
            secure: false,
        }
    }

    /// Selects `wss` (`true`) or `ws` (`false`).
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Returns the signing secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the realtime server host and port.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Returns whether the channel uses TLS.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }

    /// Returns the websocket scheme for the channel.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.secure { "wss" } else { "ws" }
    }

    /// Builds the socket URL for a signed channel token.
    #[must_use]
    pub fn socket_url(&self, token: &str) -> String {
        format!("{}://{}/socket?channel={token}", self.scheme(), self.server)
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_CHANNEL_SERVER)
    }
}

impl fmt::Debug for ChannelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelConfig")
            .field("secret", &"<redacted>")
            .field("server", &self.server)
            .field("secure", &self.secure)
            .finish()
    }
}

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    api_prefix: String,
    channel: ChannelConfig,
}

impl BoardConfig {
    /// Creates a configuration with the default API prefix.
    #[must_use]
    pub fn new(channel: ChannelConfig) -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            channel,
        }
    }

    /// Overrides the API prefix.
    #[must_use]
    pub fn with_api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.api_prefix = api_prefix.into();
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a flag
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the secret or server is unset or
    /// blank, or [`ConfigError::InvalidFlag`] when the secure flag is not a
    /// recognized boolean.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let secret = non_blank(SECRET_ENV).ok_or(ConfigError::Missing(SECRET_ENV))?;
        let server = non_blank(SERVER_ENV).ok_or(ConfigError::Missing(SERVER_ENV))?;
        let secure = non_blank(SECURE_ENV)
            .map(|value| parse_flag(SECURE_ENV, &value))
            .transpose()?
            .unwrap_or(false);

        let api_prefix =
            non_blank(API_PREFIX_ENV).unwrap_or_else(|| DEFAULT_API_PREFIX.to_owned());

        let channel = ChannelConfig::new(secret, server.trim()).with_secure(secure);
        Ok(Self::new(channel).with_api_prefix(api_prefix))
    }

    /// Returns the API prefix.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Returns the realtime channel settings.
    #[must_use]
    pub const fn channel(&self) -> &ChannelConfig {
        &self.channel
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(ChannelConfig::default())
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_owned(),
        }),
    }
}
