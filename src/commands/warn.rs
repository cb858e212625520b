use poise::CreateReply;
use serenity::builder::CreateMessage;
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;

use crate::utils::embed;
use crate::{Context, Error};

async fn warn_impl(ctx: Context<'_>, target: Member, reason: String) -> Result<(), Error> {
    if target.user.id == ctx.author().id {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("You cannot warn yourself."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let guild_name = ctx.guild().map(|g| g.name.clone()).unwrap_or_default();

    let notice = embed::warning(
        "You received a warning",
        &format!("You received a warning in **{guild_name}**"),
    )
    .field("Reason", reason.clone(), false)
    .field("Moderator", ctx.author().mention().to_string(), false);
    let dm_sent = match target
        .user
        .direct_message(ctx.serenity_context(), CreateMessage::new().embed(notice))
        .await
    {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("warn notice DM to {} failed: {e}", target.user.id);
            false
        }
    };

    let e = embed::warning(
        "User warned",
        &format!("**{}** received a warning", target.display_name()),
    )
    .field("Reason", reason, false)
    .field("Moderator", ctx.author().mention().to_string(), false)
    .field("DM delivered", if dm_sent { "Yes" } else { "No" }, false);

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Warns a user
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "User to warn"] user: Member,
    #[description = "Reason for the warning"] reason: String,
) -> Result<(), Error> {
    warn_impl(ctx, user, reason).await
}
