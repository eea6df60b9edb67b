pub mod botperms;
pub mod ping;
pub mod slowmode;

use serenity::builder::CreateCommand;
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::permissions::Permissions;

use crate::checks::{RequireBotPermissions, SlashCheck};

/// Which handler a registered command dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Ping,
    Slowmode,
    BotPerms,
}

/// A slash command together with the checks that guard it.
pub struct CommandDefinition {
    name: &'static str,
    description: &'static str,
    kind: CommandKind,
    checks: Vec<Box<dyn SlashCheck>>,
}

impl CommandDefinition {
    pub fn new(name: &'static str, description: &'static str, kind: CommandKind) -> Self {
        Self {
            name,
            description,
            kind,
            checks: Vec::new(),
        }
    }

    /// Attach a check, run in the order they were added.
    pub fn check(mut self, check: impl SlashCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn checks(&self) -> &[Box<dyn SlashCheck>] {
        &self.checks
    }

    pub fn build(&self) -> CreateCommand {
        let cmd = CreateCommand::new(self.name).description(self.description);

        match self.kind {
            CommandKind::Ping | CommandKind::BotPerms => cmd,
            CommandKind::Slowmode => slowmode::options(cmd),
        }
    }

    pub async fn run(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
    ) -> anyhow::Result<String> {
        match self.kind {
            CommandKind::Ping => Ok(ping::run()),
            CommandKind::Slowmode => slowmode::run(ctx, interaction).await,
            CommandKind::BotPerms => botperms::run(ctx, interaction),
        }
    }
}

/// Lookup table of every slash command the bot knows about.
pub struct Registry {
    commands: Vec<CommandDefinition>,
}

impl Registry {
    pub fn new(commands: Vec<CommandDefinition>) -> Self {
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    pub fn build_all(&self) -> Vec<CreateCommand> {
        self.commands.iter().map(CommandDefinition::build).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(vec![
            CommandDefinition::new("ping", "Check whether I'm alive", CommandKind::Ping)
                .check(RequireBotPermissions::new(Permissions::SEND_MESSAGES)),
            CommandDefinition::new(
                "slowmode",
                "Set how long members have to wait between messages in this channel",
                CommandKind::Slowmode,
            )
            .check(RequireBotPermissions::new(Permissions::MANAGE_CHANNELS).ignore_dms(false)),
            CommandDefinition::new(
                "botperms",
                "Show which permissions I have in this channel",
                CommandKind::BotPerms,
            )
            .check(RequireBotPermissions::new(
                Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            )),
        ])
    }
}
