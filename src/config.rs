use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration loaded from the environment.
pub struct Config {
    pub database_url: String,
    pub discord_token: String,

    /// Prefix recognised for text commands (slash commands are unaffected).
    pub command_prefix: String,
    /// Per-prompt reply timeout for the event dialogue.
    pub reply_timeout_secs: u64,
    /// Whether event start times must lie in the future.
    pub require_future_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
            reply_timeout_secs: optional_parsed("REPLY_TIMEOUT_SECS", DEFAULT_REPLY_TIMEOUT_SECS)?,
            require_future_start: optional_parsed("REQUIRE_FUTURE_START", true)?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when
/// unset and failing when set to an unparsable value.
fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}
