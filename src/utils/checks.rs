use serenity::model::guild::{Guild, Member};
use serenity::model::id::{RoleId, UserId};

/// Why a moderation action was refused before any API call was made.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModRefusal {
    SelfTarget,
    TargetOutranksInvoker,
    TargetOutranksBot,
}

impl ModRefusal {
    pub fn message(self) -> &'static str {
        match self {
            Self::SelfTarget => "You cannot use this command on yourself.",
            Self::TargetOutranksInvoker => {
                "You cannot target someone with a role equal to or above yours."
            }
            Self::TargetOutranksBot => {
                "I cannot target someone with a role equal to or above mine."
            }
        }
    }
}

/// Hierarchy guard run before every kick/ban/timeout. All refusals fire
/// before the first mutating backend call.
pub fn deny_target(
    invoker: UserId,
    target: UserId,
    invoker_top: u16,
    target_top: u16,
    bot_top: u16,
) -> Option<ModRefusal> {
    if invoker == target {
        return Some(ModRefusal::SelfTarget);
    }
    if target_top >= invoker_top {
        return Some(ModRefusal::TargetOutranksInvoker);
    }
    if target_top >= bot_top {
        return Some(ModRefusal::TargetOutranksBot);
    }
    None
}

/// Resolves role positions from the cached guild and runs `deny_target`
/// for the invoking user against `target`.
pub async fn guard_moderation(
    ctx: crate::Context<'_>,
    target: &Member,
) -> Result<Option<ModRefusal>, crate::Error> {
    let author_member = ctx
        .author_member()
        .await
        .ok_or("could not resolve your server membership")?;
    let bot_id = ctx.framework().bot_id;

    let guild = ctx.guild().ok_or("server data is not cached")?;
    let bot_top = guild
        .members
        .get(&bot_id)
        .map(|m| top_role_position(&guild, &m.roles))
        .unwrap_or(0);

    Ok(deny_target(
        ctx.author().id,
        target.user.id,
        top_role_position(&guild, &author_member.roles),
        top_role_position(&guild, &target.roles),
        bot_top,
    ))
}

/// Highest role position among `roles`; 0 when the member only has
/// @everyone.
pub fn top_role_position(guild: &Guild, roles: &[RoleId]) -> u16 {
    roles
        .iter()
        .filter_map(|id| guild.roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_target_refused_first() {
        let user = UserId::new(1);
        assert_eq!(
            deny_target(user, user, 10, 0, 10),
            Some(ModRefusal::SelfTarget)
        );
    }

    #[test]
    fn test_target_outranking_invoker_refused() {
        assert_eq!(
            deny_target(UserId::new(1), UserId::new(2), 5, 5, 10),
            Some(ModRefusal::TargetOutranksInvoker)
        );
        assert_eq!(
            deny_target(UserId::new(1), UserId::new(2), 5, 8, 10),
            Some(ModRefusal::TargetOutranksInvoker)
        );
    }

    #[test]
    fn test_target_outranking_bot_refused() {
        assert_eq!(
            deny_target(UserId::new(1), UserId::new(2), 10, 5, 5),
            Some(ModRefusal::TargetOutranksBot)
        );
    }

    #[test]
    fn test_lower_target_allowed() {
        assert_eq!(deny_target(UserId::new(1), UserId::new(2), 10, 5, 9), None);
    }
}
