use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::Timestamp;

use crate::utils::embed as embeds;
use crate::{Context, Error};

fn parse_hex_color(input: &str) -> Option<u32> {
    u32::from_str_radix(input.trim().trim_start_matches('#'), 16).ok()
}

async fn embed_impl(
    ctx: Context<'_>,
    title: String,
    description: String,
    color: Option<String>,
    image: Option<String>,
    thumbnail: Option<String>,
    footer: Option<String>,
) -> Result<(), Error> {
    // Bad hex silently falls back to the default color, like every other
    // cosmetic option here.
    let color = color
        .as_deref()
        .and_then(parse_hex_color)
        .unwrap_or(embeds::EMBED_COLOR);

    let mut e = CreateEmbed::new()
        .title(title)
        .description(description)
        .color(color)
        .timestamp(Timestamp::now());

    if let Some(image) = image {
        e = e.image(image);
    }
    if let Some(thumbnail) = thumbnail {
        e = e.thumbnail(thumbnail);
    }
    e = e.footer(CreateEmbedFooter::new(footer.unwrap_or_else(|| {
        format!("Created by {}", ctx.author().display_name())
    })));

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Builds a custom embed
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES"
)]
pub async fn embed(
    ctx: Context<'_>,
    #[description = "Embed title"] title: String,
    #[description = "Embed description"] description: String,
    #[description = "Hex color, e.g. #FF0000"] color: Option<String>,
    #[description = "Image URL"] image: Option<String>,
    #[description = "Thumbnail URL"] thumbnail: Option<String>,
    #[description = "Footer text"] footer: Option<String>,
) -> Result<(), Error> {
    embed_impl(ctx, title, description, color, image, thumbnail, footer).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(0xFF0000));
        assert_eq!(parse_hex_color("5865F2"), Some(0x5865F2));
        assert_eq!(parse_hex_color("not-a-color"), None);
    }
}
