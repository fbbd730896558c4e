use crate::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_LOCALE: &str = "en_AU";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub discord_token: Option<String>,
    /// Data Dragon locale; the locale advertised by the realm manifest is ignored.
    pub locale: String,
    pub request_timeout: Duration,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process environment.
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("RIOT_API_KEY")
            .or_else(|| var("rg_api_key"))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
            })?;

        let discord_token = var("DISCORD_TOKEN")
            .or_else(|| var("discord_token"))
            .filter(|token| !token.trim().is_empty());

        let locale = var("DDRAGON_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let timeout_secs = match var("RIOT_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "RIOT_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let command_prefix = var("BOT_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        Ok(Config {
            api_key,
            discord_token,
            locale,
            request_timeout: Duration::from_secs(timeout_secs),
            command_prefix,
        })
    }

    pub fn require_discord_token(&self) -> Result<&str, AppError> {
        self.discord_token.as_deref().ok_or_else(|| {
            AppError::ConfigError("DISCORD_TOKEN not found in environment or .env file".to_string())
        })
    }
}
