use poise::CreateReply;
use rand::seq::SliceRandom;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

const ANSWERS: [&str; 18] = [
    "🟢 It is certain",
    "🟢 Without a doubt",
    "🟢 Yes, definitely",
    "🟢 Yes",
    "🟢 You may rely on it",
    "🟢 As I see it, yes",
    "🟢 Most likely",
    "🟢 Outlook good",
    "🟡 Reply hazy, try again",
    "🟡 Ask again later",
    "🟡 Better not tell you now",
    "🟡 Cannot predict now",
    "🟡 Concentrate and ask again",
    "🔴 Don't count on it",
    "🔴 My reply is no",
    "🔴 My sources say no",
    "🔴 Outlook not so good",
    "🔴 Very doubtful",
];

async fn eightball_impl(ctx: Context<'_>, question: String) -> Result<(), Error> {
    let answer = *ANSWERS
        .choose(&mut rand::thread_rng())
        .unwrap_or(&ANSWERS[0]);

    let e = CreateEmbed::new()
        .title("🎱 Magic 8-Ball")
        .description(format!(
            "**Question:** {question}\n\n**Answer:** {answer}"
        ))
        .color(embed::EMBED_COLOR);

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Asks the magic 8-ball
#[poise::command(slash_command, rename = "8ball")]
pub async fn eightball(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
) -> Result<(), Error> {
    eightball_impl(ctx, question).await
}
