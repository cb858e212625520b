use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

async fn uptime_impl(ctx: Context<'_>) -> Result<(), Error> {
    let uptime = embed::format_uptime(ctx.data().started_at.elapsed().as_secs());

    let (guild_count, user_count) = {
        let cache = &ctx.serenity_context().cache;
        (cache.guilds().len(), cache.user_count())
    };
    let command_count = ctx.framework().options().commands.len();

    let e = CreateEmbed::new()
        .title("⏰ Uptime")
        .description(format!("The bot has been online for **{uptime}**"))
        .color(embed::SUCCESS_COLOR)
        .field(
            "📈 Statistics",
            format!(
                "**Servers:** {guild_count}\n**Users:** {user_count}\n**Commands:** {command_count}"
            ),
            false,
        );

    ctx.send(CreateReply::default().embed(e).ephemeral(true))
        .await?;
    Ok(())
}

/// Shows how long the bot has been online
#[poise::command(slash_command)]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    uptime_impl(ctx).await
}
