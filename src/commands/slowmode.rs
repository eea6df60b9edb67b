use serenity::builder::{CreateCommand, CreateCommandOption, EditChannel};
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::utils::MessageBuilder;
use tracing::info;

use crate::error::BotError;

const SECONDS_OPTION: &str = "seconds";
/// Discord caps the per-user rate limit at six hours.
pub const MAX_SLOWMODE_SECS: i64 = 21_600;

pub fn options(cmd: CreateCommand) -> CreateCommand {
    cmd.add_option(
        CreateCommandOption::new(
            CommandOptionType::Integer,
            SECONDS_OPTION,
            "Seconds between messages, 0 turns slowmode off",
        )
        .min_int_value(0)
        .max_int_value(MAX_SLOWMODE_SECS as u64)
        .required(true),
    )
}

pub fn validate_seconds(value: Option<i64>) -> Result<u16, BotError> {
    let seconds = value.ok_or_else(|| BotError::InvalidOption {
        name: SECONDS_OPTION,
        reason: "missing or not an integer".to_string(),
    })?;

    if !(0..=MAX_SLOWMODE_SECS).contains(&seconds) {
        return Err(BotError::InvalidOption {
            name: SECONDS_OPTION,
            reason: format!("must be between 0 and {}, got {}", MAX_SLOWMODE_SECS, seconds),
        });
    }

    Ok(seconds as u16)
}

pub async fn run(ctx: &Context, interaction: &CommandInteraction) -> anyhow::Result<String> {
    let value = interaction
        .data
        .options
        .iter()
        .find(|option| option.name == SECONDS_OPTION)
        .and_then(|option| option.value.as_i64());
    let seconds = validate_seconds(value)?;

    interaction
        .channel_id
        .edit(ctx, EditChannel::new().rate_limit_per_user(seconds))
        .await
        .map_err(BotError::from)?;

    info!(
        channel_id = %interaction.channel_id,
        seconds,
        "Slowmode updated by {}",
        interaction.user.name
    );

    let response = if seconds == 0 {
        MessageBuilder::new()
            .push("Slowmode is now off in ")
            .mention(&interaction.channel_id)
            .build()
    } else {
        MessageBuilder::new()
            .push("Members of ")
            .mention(&interaction.channel_id)
            .push(format!(" now have to wait {} second(s) between messages", seconds))
            .build()
    };

    Ok(response)
}
