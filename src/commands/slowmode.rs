use poise::CreateReply;
use serenity::builder::EditChannel;
use serenity::model::mention::Mentionable;

use crate::utils::embed;
use crate::{Context, Error};

const MAX_SLOWMODE_SECS: u16 = 21_600;

async fn slowmode_impl(ctx: Context<'_>, seconds: u16) -> Result<(), Error> {
    if seconds > MAX_SLOWMODE_SECS {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(&format!(
                    "Slowmode can be at most {MAX_SLOWMODE_SECS} seconds."
                )))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let channel_id = ctx.channel_id();
    match channel_id
        .edit(
            ctx.serenity_context(),
            EditChannel::new().rate_limit_per_user(seconds),
        )
        .await
    {
        Ok(_) => {
            let e = if seconds == 0 {
                embed::success("Slowmode disabled", "Slowmode was turned off in this channel")
            } else {
                embed::success(
                    "Slowmode enabled",
                    &format!("Slowmode set to **{seconds}** seconds"),
                )
            }
            .field("Channel", channel_id.mention().to_string(), false)
            .field("Moderator", ctx.author().mention().to_string(), false);
            ctx.send(CreateReply::default().embed(e)).await?;
        }
        Err(e) => {
            tracing::warn!("slowmode edit of {channel_id} failed: {e}");
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I was unable to edit this channel."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Sets this channel's slowmode
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_CHANNELS",
    required_bot_permissions = "MANAGE_CHANNELS"
)]
pub async fn slowmode(
    ctx: Context<'_>,
    #[description = "Seconds between messages (0 disables, max 21600)"] seconds: u16,
) -> Result<(), Error> {
    slowmode_impl(ctx, seconds).await
}
