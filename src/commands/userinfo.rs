use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;

use crate::utils::embed;
use crate::{Context, Error};

async fn userinfo_impl(ctx: Context<'_>, member: Option<Member>) -> Result<(), Error> {
    let member = match member {
        Some(m) => m,
        None => ctx
            .author_member()
            .await
            .ok_or("could not resolve your server membership")?
            .into_owned(),
    };

    let top_role = {
        let guild = ctx.guild().ok_or("server data is not cached")?;
        member
            .roles
            .iter()
            .filter_map(|id| guild.roles.get(id))
            .max_by_key(|role| role.position)
            .map(|role| role.id.mention().to_string())
    };

    let role_count = member.roles.len();
    let mut roles_text = member
        .roles
        .iter()
        .map(|id| id.mention().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if roles_text.is_empty() {
        roles_text = "None".to_string();
    } else if roles_text.len() > 1024 {
        // Embed field values cap at 1024 characters.
        roles_text = format!("{role_count} roles");
    }

    let user = &member.user;
    let joined = member
        .joined_at
        .map(|t| embed::discord_timestamp(t.unix_timestamp()))
        .unwrap_or_else(|| "Unknown".to_string());

    let e = CreateEmbed::new()
        .title("👤 User Info")
        .description(format!("Information about **{}**", member.display_name()))
        .color(embed::EMBED_COLOR)
        .field("📝 Username", user.name.clone(), true)
        .field("🏷️ Display name", member.display_name().to_string(), true)
        .field("🆔 ID", user.id.to_string(), true)
        .field("🤖 Bot", if user.bot { "Yes" } else { "No" }, true)
        .field(
            "⏰ Account created",
            embed::discord_timestamp(user.id.created_at().unix_timestamp()),
            true,
        )
        .field("📅 Joined server", joined, true)
        .field(
            "🎭 Top role",
            top_role.unwrap_or_else(|| "None".to_string()),
            true,
        )
        .field(format!("🎭 Roles ({role_count})"), roles_text, false)
        .thumbnail(member.face())
        .footer(CreateEmbedFooter::new(format!("ID: {}", user.id)));

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Shows information about a user
#[poise::command(slash_command, guild_only)]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "User to look up (defaults to you)"] user: Option<Member>,
) -> Result<(), Error> {
    userinfo_impl(ctx, user).await
}
