use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

async fn status_impl(ctx: Context<'_>) -> Result<(), Error> {
    let latency_ms = ctx.ping().await.as_millis();
    let uptime = embed::format_uptime(ctx.data().started_at.elapsed().as_secs());

    let (guild_count, user_count) = {
        let cache = &ctx.serenity_context().cache;
        (cache.guilds().len(), cache.user_count())
    };

    let runtime = format!(
        "**Version:** {}\n**OS:** {} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );
    let bot = format!(
        "**Latency:** {latency_ms}ms\n**Uptime:** {uptime}\n**Servers:** {guild_count}\n**Users:** {user_count}"
    );

    let e = CreateEmbed::new()
        .title("📊 System Status")
        .description("Detailed bot and runtime information")
        .color(embed::EMBED_COLOR)
        .field("🖥️ Runtime", runtime, false)
        .field("🤖 Bot", bot, false);

    ctx.send(CreateReply::default().embed(e).ephemeral(true))
        .await?;
    Ok(())
}

/// Shows detailed bot and runtime information
#[poise::command(slash_command)]
pub async fn status(ctx: Context<'_>) -> Result<(), Error> {
    status_impl(ctx).await
}
