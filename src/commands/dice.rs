use poise::CreateReply;
use rand::Rng;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

async fn dice_impl(ctx: Context<'_>, sides: Option<u32>) -> Result<(), Error> {
    let sides = sides.unwrap_or(6);

    if !(2..=100).contains(&sides) {
        ctx.send(
            CreateReply::default()
                .embed(embed::error("A die needs between 2 and 100 sides."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let result = rand::thread_rng().gen_range(1..=sides);

    let e = CreateEmbed::new()
        .title("🎲 Dice")
        .description(format!("You rolled a **{result}** on a {sides}-sided die!"))
        .color(embed::EMBED_COLOR);

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Rolls a die
#[poise::command(slash_command)]
pub async fn dice(
    ctx: Context<'_>,
    #[description = "Number of sides (2-100, default 6)"] sides: Option<u32>,
) -> Result<(), Error> {
    dice_impl(ctx, sides).await
}
