use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::utils::embed;
use crate::{Context, Error};

async fn info_impl(ctx: Context<'_>) -> Result<(), Error> {
    let (bot_name, bot_id, created_unix, avatar_url, guild_count, user_count) = {
        let cache = &ctx.serenity_context().cache;
        let user = cache.current_user();
        (
            user.name.clone(),
            user.id,
            user.id.created_at().unix_timestamp(),
            user.face(),
            cache.guilds().len(),
            cache.user_count(),
        )
    };

    let latency_ms = ctx.ping().await.as_millis();
    let uptime = embed::format_uptime(ctx.data().started_at.elapsed().as_secs());
    let command_count = ctx.framework().options().commands.len();

    let e = CreateEmbed::new()
        .title("🤖 Bot Info")
        .description(format!("**{bot_name}** - moderation and utilities for your server"))
        .color(embed::EMBED_COLOR)
        .field("📝 Name", bot_name.clone(), true)
        .field("🆔 ID", bot_id.to_string(), true)
        .field("⏰ Created", embed::discord_timestamp(created_unix), true)
        .field("🌐 Servers", guild_count.to_string(), true)
        .field("👥 Users", user_count.to_string(), true)
        .field("⚡ Commands", command_count.to_string(), true)
        .field("📡 Latency", format!("{latency_ms}ms"), true)
        .field("⏱️ Uptime", uptime, true)
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new(format!(
            "Requested by {}",
            ctx.author().display_name()
        )));

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Shows detailed information about the bot
#[poise::command(slash_command)]
pub async fn info(ctx: Context<'_>) -> Result<(), Error> {
    info_impl(ctx).await
}
