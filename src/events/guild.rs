use poise::serenity_prelude as serenity;
use serenity::builder::CreateMessage;
use serenity::model::guild::Guild;

use crate::utils::embed;
use crate::Error;

/// Best-effort greeting when the bot joins a guild; a missing or locked
/// system channel is not an error.
pub async fn welcome(ctx: &serenity::Context, guild: &Guild) -> Result<(), Error> {
    let Some(channel_id) = guild.system_channel_id else {
        return Ok(());
    };

    let greeting = embed::success(
        "Thanks for adding me!",
        &format!(
            "Hello **{}**! 👋\n\nI bring moderation, polls, reminders and tickets.\nUse `/help` to see all my commands.",
            guild.name
        ),
    );

    if let Err(e) = channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(greeting))
        .await
    {
        tracing::debug!("welcome message to {} failed: {e}", guild.id);
    }
    Ok(())
}
