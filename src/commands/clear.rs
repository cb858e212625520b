use std::time::Duration;

use poise::CreateReply;
use serenity::builder::GetMessages;
use serenity::model::mention::Mentionable;
use serenity::model::user::User;

use crate::utils::embed;
use crate::{Context, Error};

async fn clear_impl(ctx: Context<'_>, amount: u8, user: Option<User>) -> Result<(), Error> {
    if amount == 0 || amount > 100 {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("Amount must be between 1 and 100."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    ctx.defer().await?;

    let channel_id = ctx.channel_id();
    let messages = channel_id
        .messages(ctx.serenity_context(), GetMessages::new().limit(amount))
        .await?;

    let ids: Vec<_> = messages
        .iter()
        .filter(|m| user.as_ref().map_or(true, |u| m.author.id == u.id))
        .map(|m| m.id)
        .collect();

    let deleted = ids.len();
    let result = match deleted {
        0 => Ok(()),
        1 => channel_id.delete_message(ctx.serenity_context(), ids[0]).await,
        _ => channel_id.delete_messages(ctx.serenity_context(), ids).await,
    };

    if let Err(e) = result {
        tracing::warn!("bulk delete in {channel_id} failed: {e}");
        ctx.send(
            CreateReply::default()
                .embed(embed::error("I was unable to delete messages here."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let mut e = embed::success(
        "Messages cleared",
        &format!("**{deleted}** messages were deleted"),
    );
    if let Some(u) = &user {
        e = e.field("User", u.mention().to_string(), false);
    }
    e = e
        .field("Channel", channel_id.mention().to_string(), false)
        .field("Moderator", ctx.author().mention().to_string(), false);

    let confirmation = ctx.send(CreateReply::default().embed(e)).await?;

    // The confirmation is itself clutter in a freshly cleared channel.
    tokio::time::sleep(Duration::from_secs(5)).await;
    if let Err(e) = confirmation.delete(ctx).await {
        tracing::debug!("could not remove clear confirmation: {e}");
    }

    Ok(())
}

/// Bulk-deletes recent messages in this channel
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    required_bot_permissions = "MANAGE_MESSAGES"
)]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "How many recent messages to check (max 100)"] amount: u8,
    #[description = "Only delete messages from this user"] user: Option<User>,
) -> Result<(), Error> {
    clear_impl(ctx, amount, user).await
}
