use poise::CreateReply;
use rand::seq::SliceRandom;
use serenity::builder::CreateEmbed;

use crate::utils::embed;
use crate::{Context, Error};

fn split_options(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

async fn choose_impl(ctx: Context<'_>, options: String) -> Result<(), Error> {
    let choices = split_options(&options);

    if choices.len() < 2 {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(
                    "Give me at least 2 options, separated by commas.",
                ))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let chosen = choices
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default();

    let listing = choices
        .iter()
        .map(|c| format!("• {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    let e = CreateEmbed::new()
        .title("🎯 Random Choice")
        .description(format!("I choose: **{chosen}**"))
        .color(embed::EMBED_COLOR)
        .field("Options", listing, false);

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Picks one of your comma-separated options
#[poise::command(slash_command)]
pub async fn choose(
    ctx: Context<'_>,
    #[description = "Options separated by commas"] options: String,
) -> Result<(), Error> {
    choose_impl(ctx, options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_options() {
        assert_eq!(split_options("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_options("solo"), vec!["solo"]);
        assert!(split_options(" , ,").is_empty());
    }
}
