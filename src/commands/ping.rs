use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

async fn ping_impl(ctx: Context<'_>) -> Result<(), Error> {
    let latency_ms = ctx.ping().await.as_millis();

    let (guild_count, user_count) = {
        let cache = &ctx.serenity_context().cache;
        (cache.guilds().len(), cache.user_count())
    };
    let uptime = embed::format_uptime(ctx.data().started_at.elapsed().as_secs());

    let quality = if latency_ms < 100 {
        "🟢 Excellent"
    } else if latency_ms < 200 {
        "🟡 Good"
    } else {
        "🔴 Poor"
    };

    let e = CreateEmbed::new()
        .title("🏓 Pong!")
        .description("Latency and connection status")
        .color(embed::latency_color(latency_ms))
        .field("📡 Latency", format!("`{latency_ms}ms`"), true)
        .field("⏱️ Uptime", format!("`{uptime}`"), true)
        .field("🌐 Servers", format!("`{guild_count}`"), true)
        .field("👥 Users", format!("`{user_count}`"), true)
        .field("📊 Connection", quality, false);

    ctx.send(CreateReply::default().embed(e).ephemeral(true))
        .await?;
    Ok(())
}

/// Checks the bot's latency and connection status
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    ping_impl(ctx).await
}
