use itertools::Itertools;
use serenity::model::permissions::Permissions;

use super::context::InvocationContext;
use super::{Reason, SlashCheck};

/// Restricts a command to channels where the bot itself holds `permissions`.
///
/// Attach it to a command definition at registration time; it is never
/// mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequireBotPermissions {
    pub permissions: Permissions,
    /// Outcome in direct messages: `true` always passes, `false` always fails.
    pub ignore_dms: bool,
}

impl RequireBotPermissions {
    pub fn new(permissions: Permissions) -> Self {
        Self {
            permissions,
            ignore_dms: true,
        }
    }

    pub fn ignore_dms(mut self, ignore_dms: bool) -> Self {
        self.ignore_dms = ignore_dms;
        self
    }
}

/// Decides whether the bot is allowed to run a command in the given context.
///
/// Fails closed: an unknown bot member is treated the same as a lack of
/// permissions. The resolver is only consulted once the bot is known to be a
/// non-owner member of the guild.
pub fn evaluate(ctx: &InvocationContext<'_>, config: &RequireBotPermissions) -> bool {
    let guild = match &ctx.guild {
        Some(guild) => guild,
        None => return config.ignore_dms,
    };

    let bot = match &guild.bot_member {
        Some(bot) => bot,
        None => return false,
    };

    if guild.owner_id == Some(bot.user_id) {
        return true;
    }

    let resolved = guild.resolver.permissions_for(bot, ctx.channel_id);

    if resolved.contains(Permissions::ADMINISTRATOR) {
        return true;
    }

    resolved.contains(config.permissions)
}

impl SlashCheck for RequireBotPermissions {
    fn name(&self) -> &'static str {
        "RequireBotPermissions"
    }

    fn execute(&self, ctx: &InvocationContext<'_>) -> Result<(), Reason> {
        if evaluate(ctx, self) {
            return Ok(());
        }

        // The verdict is already final, this only picks the wording.
        match &ctx.guild {
            None => Err(Reason::User(
                "This command can't be used in direct messages".to_string(),
            )),
            Some(guild) if guild.bot_member.is_none() => Err(Reason::UserAndLog {
                user: "I couldn't look up my own permissions in this server, try again later"
                    .to_string(),
                log: format!("Bot member of guild {} is not cached", guild.guild_id),
            }),
            Some(_) => Err(Reason::User(format!(
                "I'm missing permissions in this channel: {}",
                permission_names(self.permissions)
            ))),
        }
    }
}

/// Human readable, comma separated permission names, e.g. `Manage Channels, Ban Members`.
pub fn permission_names(permissions: Permissions) -> String {
    if permissions.is_empty() {
        return "none".to_string();
    }

    permissions.get_permission_names().into_iter().join(", ")
}
