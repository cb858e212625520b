use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;

use crate::utils::{checks, embed};
use crate::{Context, Error};

async fn ban_impl(
    ctx: Context<'_>,
    target: Member,
    reason: Option<String>,
    delete_days: Option<u8>,
) -> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "No reason given".to_string());
    let delete_days = delete_days.unwrap_or(0);

    if delete_days > 7 {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("You can delete at most 7 days of messages."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

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

    // Best-effort notice before the ban lands; afterwards a DM would bounce.
    let notice = CreateEmbed::new()
        .title("⛔ You were banned")
        .description(format!("You were banned from **{guild_name}**"))
        .color(embed::ERROR_COLOR)
        .field("Reason", reason.clone(), false)
        .field("Moderator", ctx.author().mention().to_string(), false);
    if let Err(e) = target
        .user
        .direct_message(ctx.serenity_context(), CreateMessage::new().embed(notice))
        .await
    {
        tracing::debug!("ban notice DM to {} failed: {e}", target.user.id);
    }

    let audit = format!("Banned by {} - {reason}", ctx.author().name);
    match target
        .ban_with_reason(ctx.serenity_context(), delete_days, &audit)
        .await
    {
        Ok(()) => {
            let mut e = embed::success(
                "User banned",
                &format!("**{}** was banned from the server", target.display_name()),
            )
            .field("Reason", reason, false)
            .field("Moderator", ctx.author().mention().to_string(), false);
            if delete_days > 0 {
                e = e.field("Messages deleted", format!("{delete_days} days"), false);
            }
            ctx.send(CreateReply::default().embed(e)).await?;
        }
        Err(e) => {
            tracing::warn!("ban of {} failed: {e}", target.user.id);
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I was unable to ban this user."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Bans a user from the server
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "BAN_MEMBERS",
    required_bot_permissions = "BAN_MEMBERS"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "User to ban"] user: Member,
    #[description = "Reason for the ban"] reason: Option<String>,
    #[description = "Days of messages to delete (0-7)"] delete_days: Option<u8>,
) -> Result<(), Error> {
    ban_impl(ctx, user, reason, delete_days).await
}
