use std::env;
use std::num::NonZeroU64;

use serenity::model::id::GuildId;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Startup configuration, read from the environment (and a `.env` file if present).
#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    /// Register commands to this guild only. Guild commands update instantly,
    /// global ones can take a while to show up.
    pub dev_guild: Option<GuildId>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let dev_guild = match lookup("DEV_GUILD_ID") {
            Some(raw) => {
                let id = raw
                    .trim()
                    .parse::<NonZeroU64>()
                    .map_err(|_| ConfigError::InvalidGuildId(raw.clone()))?;
                info!("Commands will be registered to guild {}", id);
                Some(GuildId::new(id.get()))
            }
            None => {
                warn!(
                    "DEV_GUILD_ID was not found in the environment, \
                    registering commands globally"
                );
                None
            }
        };

        Ok(Config { token, dev_guild })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        assert_eq!(from_map(&[]).unwrap_err(), ConfigError::MissingToken);
        assert_eq!(
            from_map(&[("DISCORD_TOKEN", "  ")]).unwrap_err(),
            ConfigError::MissingToken
        );
    }

    #[test]
    fn dev_guild_is_optional() {
        let config = from_map(&[("DISCORD_TOKEN", "abc")]).unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.dev_guild, None);
    }

    #[test]
    fn dev_guild_is_parsed() {
        let config = from_map(&[
            ("DISCORD_TOKEN", "abc"),
            ("DEV_GUILD_ID", "81384788765712384"),
        ])
        .unwrap();
        assert_eq!(config.dev_guild, Some(GuildId::new(81384788765712384)));
    }

    #[test]
    fn malformed_dev_guild_is_rejected() {
        for raw in ["0", "general", "-5"] {
            assert_eq!(
                from_map(&[("DISCORD_TOKEN", "abc"), ("DEV_GUILD_ID", raw)]).unwrap_err(),
                ConfigError::InvalidGuildId(raw.to_string())
            );
        }
    }
}
