use thiserror::Error as ThisError;

/// Error type for everything around the checks: startup configuration,
/// talking to Discord, and bad command input.
///
/// The checks themselves never error, they only pass or fail.
#[derive(ThisError, Debug)]
pub enum BotError {
    #[error("serenity returned an error")]
    Serenity(serenity::Error),
    #[error("invalid configuration")]
    Config(#[source] ConfigError),
    #[error("invalid value for option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

impl From<serenity::Error> for BotError {
    fn from(error: serenity::Error) -> Self {
        BotError::Serenity(error)
    }
}

impl From<ConfigError> for BotError {
    fn from(error: ConfigError) -> Self {
        BotError::Config(error)
    }
}

#[derive(ThisError, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN was not found in the environment")]
    MissingToken,
    #[error("DEV_GUILD_ID must be a non-zero guild id, got `{0}`")]
    InvalidGuildId(String),
}
