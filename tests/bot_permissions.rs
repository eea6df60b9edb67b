use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::model::permissions::Permissions;
use slash_gate::checks::{
    evaluate, BotMember, FixedPermissions, GuildContext, InvocationContext, RequireBotPermissions,
};

const GUILD: u64 = 81384788765712384;
const CHANNEL: u64 = 381870553235193857;
const OWNER: u64 = 80351110224678912;
const BOT: u64 = 381880193251409931;

fn in_guild(bot: Option<u64>, resolver: &FixedPermissions) -> InvocationContext<'_> {
    InvocationContext::in_guild(
        ChannelId::new(CHANNEL),
        GuildContext {
            guild_id: GuildId::new(GUILD),
            owner_id: Some(UserId::new(OWNER)),
            bot_member: bot.map(|id| BotMember {
                user_id: UserId::new(id),
            }),
            resolver,
        },
    )
}

fn require(permissions: Permissions) -> RequireBotPermissions {
    RequireBotPermissions::new(permissions)
}

#[test]
fn dm_with_ignore_dms_passes() {
    let ctx = InvocationContext::direct_message(ChannelId::new(CHANNEL));
    assert!(evaluate(&ctx, &require(Permissions::MANAGE_CHANNELS).ignore_dms(true)));
}

#[test]
fn dm_without_ignore_dms_fails() {
    let ctx = InvocationContext::direct_message(ChannelId::new(CHANNEL));
    assert!(!evaluate(&ctx, &require(Permissions::MANAGE_CHANNELS).ignore_dms(false)));
}

#[test]
fn unresolved_bot_member_fails() {
    let resolver = FixedPermissions(Permissions::all());
    let ctx = in_guild(None, &resolver);
    assert!(!evaluate(&ctx, &require(Permissions::MANAGE_CHANNELS)));
}

#[test]
fn guild_owner_passes() {
    let resolver = FixedPermissions(Permissions::empty());
    let ctx = in_guild(Some(OWNER), &resolver);
    assert!(evaluate(&ctx, &require(Permissions::MANAGE_CHANNELS)));
}

#[test]
fn administrator_passes() {
    let resolver = FixedPermissions(Permissions::ADMINISTRATOR);
    let ctx = in_guild(Some(BOT), &resolver);
    assert!(evaluate(&ctx, &require(Permissions::BAN_MEMBERS)));
}

#[test]
fn missing_permission_fails() {
    let resolver = FixedPermissions(Permissions::SEND_MESSAGES);
    let ctx = in_guild(Some(BOT), &resolver);
    assert!(!evaluate(&ctx, &require(Permissions::MANAGE_CHANNELS)));
}

#[test]
fn superset_passes() {
    let resolver = FixedPermissions(Permissions::SEND_MESSAGES | Permissions::MANAGE_CHANNELS);
    let ctx = in_guild(Some(BOT), &resolver);
    assert!(evaluate(&ctx, &require(Permissions::MANAGE_CHANNELS)));
}

#[test]
fn dm_outcome_ignores_everything_but_the_flag() {
    let ctx = InvocationContext::direct_message(ChannelId::new(CHANNEL));

    for flag in Permissions::all().iter() {
        for ignore_dms in [true, false] {
            assert_eq!(evaluate(&ctx, &require(flag).ignore_dms(ignore_dms)), ignore_dms);
        }
    }
}

#[test]
fn owner_and_admin_pass_any_requirement() {
    let nothing = FixedPermissions(Permissions::empty());
    let admin = FixedPermissions(Permissions::ADMINISTRATOR);

    for flag in Permissions::all().iter() {
        assert!(evaluate(&in_guild(Some(OWNER), &nothing), &require(flag)));
        assert!(evaluate(&in_guild(Some(BOT), &admin), &require(flag)));
    }
}

#[test]
fn every_required_bit_must_be_present() {
    let granted = Permissions::SEND_MESSAGES
        | Permissions::VIEW_CHANNEL
        | Permissions::MANAGE_MESSAGES
        | Permissions::EMBED_LINKS;
    let resolver = FixedPermissions(granted);
    let ctx = in_guild(Some(BOT), &resolver);

    for flag in Permissions::all().iter() {
        if flag == Permissions::ADMINISTRATOR {
            continue;
        }
        let required = Permissions::SEND_MESSAGES | flag;
        let expected = (granted & required) == required;

        assert_eq!(evaluate(&ctx, &require(required)), expected, "required {:?}", required);
    }
}

#[test]
fn closures_work_as_resolvers() {
    let per_channel = |_: &BotMember, channel_id: ChannelId| {
        if channel_id == ChannelId::new(CHANNEL) {
            Permissions::MANAGE_CHANNELS
        } else {
            Permissions::empty()
        }
    };
    let guild = |channel: u64| {
        InvocationContext::in_guild(
            ChannelId::new(channel),
            GuildContext {
                guild_id: GuildId::new(GUILD),
                owner_id: Some(UserId::new(OWNER)),
                bot_member: Some(BotMember {
                    user_id: UserId::new(BOT),
                }),
                resolver: &per_channel,
            },
        )
    };

    assert!(evaluate(&guild(CHANNEL), &require(Permissions::MANAGE_CHANNELS)));
    assert!(!evaluate(&guild(CHANNEL + 1), &require(Permissions::MANAGE_CHANNELS)));
}
