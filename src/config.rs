use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_STATIC_DIR: &str = "public";

pub struct Config {
    pub discord_bot_token: String,

    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment and command-line arguments.
    ///
    /// The bot token is read from `DISCORD_BOT_TOKEN` and the listening port is the sole
    /// positional argument. `STATIC_DIR` optionally overrides the directory static files
    /// are served from.
    ///
    /// # Arguments
    /// - `args` - Command-line arguments, excluding the program name
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values were present and valid
    /// - `Err(AppError::ConfigErr)` - Missing token, missing port, or unparsable port
    pub fn from_env_and_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let discord_bot_token = std::env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            discord_bot_token,
            port: parse_port(args)?,
            static_dir,
        })
    }
}

/// Parses the listening port from the first positional argument.
fn parse_port<I>(args: I) -> Result<u16, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let value = args
        .into_iter()
        .next()
        .ok_or(ConfigError::MissingPortArgument)?;

    value
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort { value, source })
}
