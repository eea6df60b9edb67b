use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use tracing::{error, info};

use crate::checks::{FailedCheck, Reason};

/// Send a reply to `interaction`, only visible to the invoking user if `ephemeral`.
pub async fn reply(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: String,
    ephemeral: bool,
) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral);

    if let Err(why) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        error!("Cannot respond to slash command: {}", why);
    }
}

pub async fn check_failed(ctx: &Context, interaction: &CommandInteraction, failed: FailedCheck) {
    match &failed.reason {
        Reason::User(_) => info!(
            "{} blocked /{} for {}",
            failed.name, interaction.data.name, interaction.user.name
        ),
        Reason::UserAndLog { log, .. } => info!(
            "{} blocked /{} for {}: {}",
            failed.name, interaction.data.name, interaction.user.name, log
        ),
    }

    reply(ctx, interaction, failed.reason.user_message().to_string(), true).await;
}

/// Relay the command's output, or log its error and tell the user something went wrong.
pub async fn after(
    ctx: &Context,
    interaction: &CommandInteraction,
    result: anyhow::Result<String>,
) {
    match result {
        Ok(content) => reply(ctx, interaction, content, false).await,
        Err(why) => {
            error!("Error in {}: {:?}", interaction.data.name, why);
            reply(
                ctx,
                interaction,
                "Something went wrong while running this command. This has been logged".to_string(),
                true,
            )
            .await;
        }
    }
}

pub async fn unrecognised_command(ctx: &Context, interaction: &CommandInteraction) {
    error!(
        "A user named {:?} tried to execute an unknown command: {}",
        interaction.user.name, interaction.data.name
    );
    reply(ctx, interaction, "not implemented :(".to_string(), true).await;
}
