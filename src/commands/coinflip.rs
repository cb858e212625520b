use poise::CreateReply;
use rand::seq::SliceRandom;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

async fn coinflip_impl(ctx: Context<'_>) -> Result<(), Error> {
    let result = *["Heads", "Tails"]
        .choose(&mut rand::thread_rng())
        .unwrap_or(&"Heads");
    let emoji = if result == "Heads" { "🪙" } else { "🔘" };

    let e = CreateEmbed::new()
        .title("🪙 Coinflip")
        .description(format!("{emoji} **{result}**!"))
        .color(embed::EMBED_COLOR);

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Flips a coin
#[poise::command(slash_command)]
pub async fn coinflip(ctx: Context<'_>) -> Result<(), Error> {
    coinflip_impl(ctx).await
}
