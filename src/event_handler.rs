use serenity::async_trait;
use serenity::model::application::{Command, CommandInteraction, Interaction};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tracing::{error, info, instrument};

use crate::checks::cache::run_interaction_checks;
use crate::commands::Registry;
use crate::hooks;

pub struct Handler {
    pub(crate) dev_guild: Option<GuildId>,
    pub(crate) registry: Registry,
}

impl Handler {
    pub fn new(dev_guild: Option<GuildId>, registry: Registry) -> Self {
        Self { dev_guild, registry }
    }

    async fn register_commands(&self, ctx: &Context) -> Result<(), serenity::Error> {
        let commands = self.registry.build_all();

        match self.dev_guild {
            Some(guild_id) => {
                guild_id.set_commands(&ctx.http, commands).await?;
                info!("Registered {} commands to guild {}", self.registry.len(), guild_id);
            }
            None => {
                Command::set_global_commands(&ctx.http, commands).await?;
                info!("Registered {} global commands", self.registry.len());
            }
        }

        Ok(())
    }

    #[instrument(
        skip_all,
        fields(command = %interaction.data.name, guild_id = ?interaction.guild_id)
    )]
    async fn dispatch(&self, ctx: &Context, interaction: &CommandInteraction) {
        let definition = match self.registry.get(&interaction.data.name) {
            Some(definition) => definition,
            None => return hooks::unrecognised_command(ctx, interaction).await,
        };

        // Must stay synchronous: the cache guard can't be held across an await.
        if let Err(failed) = run_interaction_checks(&ctx.cache, interaction, definition.checks()) {
            return hooks::check_failed(ctx, interaction, failed).await;
        }

        let result = definition.run(ctx, interaction).await;
        hooks::after(ctx, interaction, result).await;
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Connected as {}", ready.user.name);

        if let Err(why) = self.register_commands(&ctx).await {
            error!("Failed to register slash commands: {:?}", why);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            self.dispatch(&ctx, &command).await;
        }
    }
}
