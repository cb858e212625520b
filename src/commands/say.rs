use poise::CreateReply;
use serenity::builder::CreateMessage;
use serenity::model::id::ChannelId;
use serenity::model::mention::Mentionable;

use crate::utils::embed;
use crate::{Context, Error};

async fn say_impl(
    ctx: Context<'_>,
    message: String,
    channel: Option<ChannelId>,
) -> Result<(), Error> {
    let target = channel.unwrap_or_else(|| ctx.channel_id());

    match target
        .send_message(ctx.serenity_context(), CreateMessage::new().content(message))
        .await
    {
        Ok(_) => {
            let reply = if channel.is_some() {
                CreateReply::default()
                    .embed(embed::success(
                        "Message sent",
                        &format!("Message sent to {}", target.mention()),
                    ))
                    .ephemeral(true)
            } else {
                CreateReply::default().content("✅ Message sent!").ephemeral(true)
            };
            ctx.send(reply).await?;
        }
        Err(e) => {
            tracing::warn!("say into {target} failed: {e}");
            ctx.send(
                CreateReply::default()
                    .embed(embed::error("I cannot send messages in that channel."))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

/// Makes the bot say something
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES"
)]
pub async fn say(
    ctx: Context<'_>,
    #[description = "Message for the bot to send"] message: String,
    #[description = "Channel to send it to (defaults to here)"] channel: Option<ChannelId>,
) -> Result<(), Error> {
    say_impl(ctx, message, channel).await
}
