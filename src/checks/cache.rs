use serenity::cache::Cache;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::GuildChannel;
use serenity::model::guild::Guild;
use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::model::permissions::Permissions;
use tracing::debug;

use super::context::{
    BotMember, FixedPermissions, GuildContext, InvocationContext, PermissionResolver,
};
use super::{run_checks, FailedCheck, SlashCheck};

/// Resolves the bot's channel permissions from a cached guild.
///
/// Discord sends the bot's resolved permissions along with every interaction
/// (`app_permissions`); those take precedence over anything computed locally.
struct CachedGuildResolver<'a> {
    guild: &'a Guild,
    app_permissions: Option<Permissions>,
}

impl PermissionResolver for CachedGuildResolver<'_> {
    fn permissions_for(&self, bot: &BotMember, channel_id: ChannelId) -> Permissions {
        if let Some(permissions) = self.app_permissions {
            return permissions;
        }

        let member = match self.guild.members.get(&bot.user_id) {
            Some(member) => member,
            None => return Permissions::empty(),
        };

        match find_channel(self.guild, channel_id) {
            Some(channel) => self.guild.user_permissions_in(channel, member),
            None => {
                debug!(%channel_id, guild_id = %self.guild.id, "Channel missing from cache");
                Permissions::empty()
            }
        }
    }
}

/// Threads aren't part of `Guild::channels`, so fall back to the thread's parent.
fn find_channel(guild: &Guild, channel_id: ChannelId) -> Option<&GuildChannel> {
    guild.channels.get(&channel_id).or_else(|| {
        guild
            .threads
            .iter()
            .find(|thread| thread.id == channel_id)
            .and_then(|thread| thread.parent_id)
            .and_then(|parent_id| guild.channels.get(&parent_id))
    })
}

/// Builds the [`InvocationContext`] for `interaction` from the cache and hands it to `f`.
///
/// The cache guard only lives for the duration of `f`, so `f` must not block.
pub fn with_invocation_context<T>(
    cache: &Cache,
    interaction: &CommandInteraction,
    f: impl FnOnce(&InvocationContext<'_>) -> T,
) -> T {
    let channel_id = interaction.channel_id;

    let guild_id = match interaction.guild_id {
        Some(guild_id) => guild_id,
        None => return f(&InvocationContext::direct_message(channel_id)),
    };

    let bot_id = cache.current_user().id;
    let guild = cache.guild(guild_id);

    with_guild_context(
        guild_id,
        guild.as_deref(),
        bot_id,
        channel_id,
        interaction.app_permissions,
        f,
    )
}

/// Guild half of [`with_invocation_context`], once the cache lookups are done.
fn with_guild_context<T>(
    guild_id: GuildId,
    guild: Option<&Guild>,
    bot_id: UserId,
    channel_id: ChannelId,
    app_permissions: Option<Permissions>,
    f: impl FnOnce(&InvocationContext<'_>) -> T,
) -> T {
    match guild {
        Some(guild) => {
            let bot_member = guild
                .members
                .get(&bot_id)
                .map(|member| BotMember { user_id: member.user.id });

            if bot_member.is_none() {
                debug!(%guild_id, %bot_id, "Bot member missing from guild cache");
            }

            let resolver = CachedGuildResolver {
                guild,
                app_permissions,
            };

            f(&InvocationContext::in_guild(
                channel_id,
                GuildContext {
                    guild_id,
                    owner_id: Some(guild.owner_id),
                    bot_member,
                    resolver: &resolver,
                },
            ))
        }
        None => {
            debug!(%guild_id, "Guild missing from cache");
            let resolver = FixedPermissions(Permissions::empty());

            f(&InvocationContext::in_guild(
                channel_id,
                GuildContext {
                    guild_id,
                    owner_id: None,
                    bot_member: None,
                    resolver: &resolver,
                },
            ))
        }
    }
}

/// Runs the checks of a command against the context of `interaction`.
pub fn run_interaction_checks(
    cache: &Cache,
    interaction: &CommandInteraction,
    checks: &[Box<dyn SlashCheck>],
) -> Result<(), FailedCheck> {
    with_invocation_context(cache, interaction, |ctx| run_checks(checks, ctx))
}

/// The bot's effective permissions where `interaction` was invoked, if known.
pub fn bot_channel_permissions(
    cache: &Cache,
    interaction: &CommandInteraction,
) -> Option<Permissions> {
    with_invocation_context(cache, interaction, |ctx| ctx.bot_permissions())
}
