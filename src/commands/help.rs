use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::utils::embed;
use crate::{Context, Error};

async fn help_impl(ctx: Context<'_>) -> Result<(), Error> {
    let info_cmds = "\
`/ping` — latency and connection status
`/uptime` — how long the bot has been online
`/status` — bot and runtime details
`/info` — bot information
`/serverinfo` — server information
`/userinfo` — user information
`/avatar` — a user's avatar";

    let mod_cmds = "\
`/kick` — kick a user
`/ban` — ban a user
`/unban` — lift a ban
`/timeout` — time a user out
`/untimeout` — lift a timeout
`/clear` — bulk-delete messages
`/warn` — warn a user
`/slowmode` — set channel slowmode";

    let utility_cmds = "\
`/say` — speak through the bot
`/embed` — build a custom embed
`/poll` — run a poll with up to 5 options
`/remind` — get reminded later (e.g. 1h30m)
`/ticket` — post the ticket-opening button
`/coinflip` — heads or tails
`/dice` — roll a die
`/choose` — pick one of your options
`/8ball` — ask the magic 8-ball";

    let e = CreateEmbed::new()
        .title("📚 Help")
        .description("All available commands")
        .color(embed::EMBED_COLOR)
        .field("📊 Information", info_cmds, false)
        .field("🔨 Moderation", mod_cmds, false)
        .field("🛠️ Utilities", utility_cmds, false)
        .footer(CreateEmbedFooter::new(
            "Moderation commands require the matching server permission",
        ));

    ctx.send(CreateReply::default().embed(e).ephemeral(true))
        .await?;
    Ok(())
}

/// Shows all available commands
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    help_impl(ctx).await
}
