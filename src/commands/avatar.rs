use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::user::User;

use crate::utils::embed;
use crate::{Context, Error};

async fn avatar_impl(ctx: Context<'_>, user: Option<User>) -> Result<(), Error> {
    let user = user.unwrap_or_else(|| ctx.author().clone());

    let e = CreateEmbed::new()
        .title(format!("🖼️ Avatar of {}", user.display_name()))
        .color(embed::EMBED_COLOR)
        .image(user.face())
        .footer(CreateEmbedFooter::new(format!(
            "Requested by {}",
            ctx.author().display_name()
        )));

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Shows a user's avatar
#[poise::command(slash_command)]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "User whose avatar to show (defaults to you)"] user: Option<User>,
) -> Result<(), Error> {
    avatar_impl(ctx, user).await
}
