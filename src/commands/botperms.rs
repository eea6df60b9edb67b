use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::utils::MessageBuilder;

use crate::checks::bot_permissions::permission_names;
use crate::checks::cache::bot_channel_permissions;

/// Report the bot's effective permissions in the channel the command came from.
pub fn run(ctx: &Context, interaction: &CommandInteraction) -> anyhow::Result<String> {
    let response = match bot_channel_permissions(&ctx.cache, interaction) {
        Some(permissions) => MessageBuilder::new()
            .push("My permissions in ")
            .mention(&interaction.channel_id)
            .push(": ")
            .push_mono_safe(permission_names(permissions))
            .build(),
        None if interaction.guild_id.is_none() => {
            "There are no permissions to speak of in direct messages".to_string()
        }
        None => "I couldn't find my own membership in this server".to_string(),
    };

    Ok(response)
}
