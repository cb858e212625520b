use poise::CreateReply;
use serenity::builder::CreateMessage;
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;

use crate::utils::{checks, embed};
use crate::{Context, Error};

async fn kick_impl(ctx: Context<'_>, target: Member, reason: Option<String>) -> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "No reason given".to_string());

    if let Some(refusal) = checks::guard_moderation(ctx, &target).await? {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(refusal.message()))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let guild_name = ctx.guild().map(|g| g.name.clone()).unwrap_or_default();

    // Best-effort notice; the kick proceeds whether or not the DM lands.
    let notice = embed::warning(
        "You were kicked",
        &format!("You were kicked from **{guild_name}**"),
    )
    .field("Reason", reason.clone(), false)
    .field("Moderator", ctx.author().mention().to_string(), false);
    if let Err(e) = target
        .user
        .direct_message(ctx.serenity_context(), CreateMessage::new().embed(notice))
        .await
    {
        tracing::debug!("kick notice DM to {} failed: {e}", target.user.id);
    }

    let audit = format!("Kicked by {} - {reason}", ctx.author().name);
    match target.kick_with_reason(ctx.serenity_context(), &audit).await {
        Ok(()) => {
            let e = embed::success(
                "User kicked",
                &format!("**{}** was kicked from the server", target.display_name()),
            )
            .field("Reason", reason, false)
            .field("Moderator", ctx.author().mention().to_string(), false);
            ctx.send(CreateReply::default().embed(e)).await?;
        }
        Err(e) => {
            tracing::warn!("kick of {} failed: {e}", target.user.id);
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I was unable to kick this user."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Kicks a user from the server
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "KICK_MEMBERS",
    required_bot_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "User to kick"] user: Member,
    #[description = "Reason for the kick"] reason: Option<String>,
) -> Result<(), Error> {
    kick_impl(ctx, user, reason).await
}
