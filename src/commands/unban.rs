use poise::CreateReply;
use serenity::model::id::UserId;
use serenity::model::mention::Mentionable;

use crate::utils::embed;
use crate::{Context, Error};

async fn unban_impl(ctx: Context<'_>, user_id: String, reason: Option<String>) -> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "No reason given".to_string());

    let Ok(user_id) = user_id.trim().parse::<u64>() else {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("That is not a valid user ID."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };
    let user_id = UserId::new(user_id);

    let guild_id = ctx.guild_id().ok_or("guild_only command outside a guild")?;

    let bans = guild_id.bans(ctx.serenity_context(), None, None).await?;
    let Some(entry) = bans.iter().find(|ban| ban.user.id == user_id) else {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("That user is not in the ban list."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };
    let banned_name = entry.user.name.clone();

    match guild_id.unban(ctx.serenity_context(), user_id).await {
        Ok(()) => {
            let e = embed::success(
                "User unbanned",
                &format!("**{banned_name}** was unbanned from the server"),
            )
            .field("Reason", reason, false)
            .field("Moderator", ctx.author().mention().to_string(), false);
            ctx.send(CreateReply::default().embed(e)).await?;
        }
        Err(e) => {
            tracing::warn!("unban of {user_id} failed: {e}");
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I was unable to unban this user."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Lifts a user's ban
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "BAN_MEMBERS",
    required_bot_permissions = "BAN_MEMBERS"
)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "ID of the user to unban"] user_id: String,
    #[description = "Reason for the unban"] reason: Option<String>,
) -> Result<(), Error> {
    unban_impl(ctx, user_id, reason).await
}
