use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Champion {0} is missing from Data Dragon")]
    UnknownChampion(i64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Chart rendering error: {0}")]
    ChartError(String),

    #[error("Background request failed: {0}")]
    TaskError(String),

    /// Boxed because serenity's error type is large.
    #[error(transparent)]
    DiscordError(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordError(Box::new(err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::TaskError(err.to_string())
    }
}
