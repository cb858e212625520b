use poise::CreateReply;

use crate::utils::components;
use crate::{Context, Error};

async fn ticket_impl(ctx: Context<'_>) -> Result<(), Error> {
    ctx.send(
        CreateReply::default()
            .content("Click the button below to open a new ticket")
            .components(components::ticket_open()),
    )
    .await?;
    Ok(())
}

/// Posts the ticket-opening button
#[poise::command(slash_command, guild_only)]
pub async fn ticket(ctx: Context<'_>) -> Result<(), Error> {
    ticket_impl(ctx).await
}
