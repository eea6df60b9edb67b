pub mod bot_permissions;
pub mod cache;
pub mod context;

pub use bot_permissions::{evaluate, RequireBotPermissions};
pub use context::{BotMember, FixedPermissions, GuildContext, InvocationContext, PermissionResolver};

/// Why a check refused to let a command through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Shown to the invoking user as is.
    User(String),
    /// Shown to the user, with extra detail that only goes to the logs.
    UserAndLog { user: String, log: String },
}

impl Reason {
    pub fn user_message(&self) -> &str {
        match self {
            Reason::User(user) | Reason::UserAndLog { user, .. } => user,
        }
    }
}

/// A precondition attached to a slash command and evaluated before it runs.
///
/// Checks are synchronous. Anything that needs I/O belongs in whatever
/// builds the [`InvocationContext`], not in the check.
pub trait SlashCheck: Send + Sync {
    fn name(&self) -> &'static str;

    fn execute(&self, ctx: &InvocationContext<'_>) -> Result<(), Reason>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedCheck {
    pub name: &'static str,
    pub reason: Reason,
}

/// Runs `checks` in order and stops at the first one that fails.
pub fn run_checks(
    checks: &[Box<dyn SlashCheck>],
    ctx: &InvocationContext<'_>,
) -> Result<(), FailedCheck> {
    for check in checks {
        check.execute(ctx).map_err(|reason| FailedCheck {
            name: check.name(),
            reason,
        })?;
    }

    Ok(())
}
