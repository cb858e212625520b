use poise::CreateReply;
use serenity::builder::EditMember;
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;
use serenity::model::Timestamp;

use crate::utils::embed;
use crate::{Context, Error};

fn is_timed_out(member: &Member) -> bool {
    member
        .communication_disabled_until
        .is_some_and(|until| until.unix_timestamp() > Timestamp::now().unix_timestamp())
}

async fn untimeout_impl(
    ctx: Context<'_>,
    target: Member,
    reason: Option<String>,
) -> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "No reason given".to_string());

    if !is_timed_out(&target) {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("This user is not timed out."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let guild_id = ctx.guild_id().ok_or("guild_only command outside a guild")?;
    let audit = format!("Timeout lifted by {} - {reason}", ctx.author().name);
    let builder = EditMember::new()
        .enable_communication()
        .audit_log_reason(&audit);

    match guild_id
        .edit_member(ctx.serenity_context(), target.user.id, builder)
        .await
    {
        Ok(_) => {
            let e = embed::success(
                "Timeout lifted",
                &format!("**{}** is no longer timed out", target.display_name()),
            )
            .field("Reason", reason, false)
            .field("Moderator", ctx.author().mention().to_string(), false);
            ctx.send(CreateReply::default().embed(e)).await?;
        }
        Err(e) => {
            tracing::warn!("untimeout of {} failed: {e}", target.user.id);
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I was unable to lift this user's timeout."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Lifts a user's timeout
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MODERATE_MEMBERS",
    required_bot_permissions = "MODERATE_MEMBERS"
)]
pub async fn untimeout(
    ctx: Context<'_>,
    #[description = "User whose timeout to lift"] user: Member,
    #[description = "Reason for lifting it"] reason: Option<String>,
) -> Result<(), Error> {
    untimeout_impl(ctx, user, reason).await
}
