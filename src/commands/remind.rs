use std::time::Duration;

use poise::CreateReply;
use serenity::model::Timestamp;

use crate::reminder::{self, PendingReminder};
use crate::utils::{duration, embed};
use crate::{Context, Error};

async fn remind_impl(ctx: Context<'_>, duration_text: String, message: String) -> Result<(), Error> {
    let Some(seconds) = duration::parse(&duration_text) else {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(
                    "Invalid duration. Use formats like `1h`, `30m`, `2d` or `1h30m`.",
                ))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    if !reminder::within_limit(seconds) {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("The maximum reminder delay is 7 days."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let created_unix = Timestamp::now().unix_timestamp();
    let due_unix = created_unix + seconds as i64;

    let confirmation = embed::success(
        "Reminder created",
        &format!("You will be reminded in **{}**", duration_text.trim()),
    )
    .field("Reminder", message.clone(), false)
    .field("When", embed::discord_timestamp(due_unix), false);
    ctx.send(CreateReply::default().embed(confirmation).ephemeral(true))
        .await?;

    reminder::spawn(
        ctx.serenity_context().http.clone(),
        PendingReminder {
            requester: ctx.author().clone(),
            fallback_channel: ctx.channel_id(),
            payload: message,
            delay: Duration::from_secs(seconds),
            created_unix,
        },
    );
    Ok(())
}

/// Creates a one-shot reminder
#[poise::command(slash_command)]
pub async fn remind(
    ctx: Context<'_>,
    #[description = "When to remind you (e.g. 1h30m, 2d, 45m)"] duration: String,
    #[description = "What to remind you of"] message: String,
) -> Result<(), Error> {
    remind_impl(ctx, duration, message).await
}
