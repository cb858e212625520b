use poise::CreateReply;
use serenity::builder::EditMember;
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;
use serenity::model::Timestamp;

use crate::utils::{checks, embed};
use crate::{Context, Error};

const MAX_TIMEOUT_MINUTES: u32 = 2880;

async fn timeout_impl(
    ctx: Context<'_>,
    target: Member,
    minutes: u32,
    reason: Option<String>,
) -> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "No reason given".to_string());

    if minutes == 0 || minutes > MAX_TIMEOUT_MINUTES {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(&format!(
                    "Timeout must be between 1 and {MAX_TIMEOUT_MINUTES} minutes."
                )))
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

    let guild_id = ctx.guild_id().ok_or("guild_only command outside a guild")?;
    let until_unix = Timestamp::now().unix_timestamp() + i64::from(minutes) * 60;
    let until = Timestamp::from_unix_timestamp(until_unix)?;

    let audit = format!("Timed out by {} - {reason}", ctx.author().name);
    let builder = EditMember::new()
        .disable_communication_until_datetime(until)
        .audit_log_reason(&audit);

    match guild_id
        .edit_member(ctx.serenity_context(), target.user.id, builder)
        .await
    {
        Ok(_) => {
            let e = embed::warning(
                "User timed out",
                &format!("**{}** was timed out", target.display_name()),
            )
            .field("Duration", format!("{minutes} minutes"), false)
            .field("Until", embed::discord_timestamp(until_unix), false)
            .field("Reason", reason, false)
            .field("Moderator", ctx.author().mention().to_string(), false);
            ctx.send(CreateReply::default().embed(e)).await?;
        }
        Err(e) => {
            tracing::warn!("timeout of {} failed: {e}", target.user.id);
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I was unable to time this user out."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Times a user out
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MODERATE_MEMBERS",
    required_bot_permissions = "MODERATE_MEMBERS"
)]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "User to time out"] user: Member,
    #[description = "Duration in minutes (max 2880)"] minutes: u32,
    #[description = "Reason for the timeout"] reason: Option<String>,
) -> Result<(), Error> {
    timeout_impl(ctx, user, minutes, reason).await
}
