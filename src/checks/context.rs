use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::model::permissions::Permissions;

/// Everything a check gets to see about the command invocation.
///
/// Built by the dispatcher right before the checks run and dropped right
/// after, so it can borrow straight from the cache.
pub struct InvocationContext<'a> {
    /// `None` when the command was invoked in a direct message.
    pub guild: Option<GuildContext<'a>>,
    pub channel_id: ChannelId,
}

pub struct GuildContext<'a> {
    pub guild_id: GuildId,
    /// `None` if the guild isn't cached and the owner is therefore unknown.
    pub owner_id: Option<UserId>,
    /// The bot's own membership in this guild, if it could be found.
    pub bot_member: Option<BotMember>,
    pub resolver: &'a dyn PermissionResolver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotMember {
    pub user_id: UserId,
}

impl<'a> InvocationContext<'a> {
    pub fn direct_message(channel_id: ChannelId) -> Self {
        Self {
            guild: None,
            channel_id,
        }
    }

    pub fn in_guild(channel_id: ChannelId, guild: GuildContext<'a>) -> Self {
        Self {
            guild: Some(guild),
            channel_id,
        }
    }

    /// The bot's effective permissions in the invocation channel,
    /// or `None` outside of a guild or when the bot member is unknown.
    pub fn bot_permissions(&self) -> Option<Permissions> {
        let guild = self.guild.as_ref()?;
        let bot = guild.bot_member.as_ref()?;
        Some(guild.resolver.permissions_for(bot, self.channel_id))
    }
}

/// Maps a member and a channel to the member's effective permissions there.
///
/// Implementations are expected to apply the platform's own rules: role
/// permissions, then channel overwrites superseding them.
pub trait PermissionResolver {
    fn permissions_for(&self, member: &BotMember, channel_id: ChannelId) -> Permissions;
}

impl<F> PermissionResolver for F
where
    F: Fn(&BotMember, ChannelId) -> Permissions,
{
    fn permissions_for(&self, member: &BotMember, channel_id: ChannelId) -> Permissions {
        self(member, channel_id)
    }
}

/// Resolver for a bitmask that has already been computed elsewhere,
/// e.g. the `app_permissions` Discord attaches to an interaction.
#[derive(Clone, Copy, Debug)]
pub struct FixedPermissions(pub Permissions);

impl PermissionResolver for FixedPermissions {
    fn permissions_for(&self, _: &BotMember, _: ChannelId) -> Permissions {
        self.0
    }
}
