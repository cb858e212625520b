use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::channel::ChannelType;
use serenity::model::mention::Mentionable;

use crate::utils::embed;
use crate::{Context, Error};

struct GuildSummary {
    name: String,
    id: u64,
    owner_mention: String,
    created_unix: i64,
    member_count: u64,
    text_channels: usize,
    voice_channels: usize,
    categories: usize,
    role_count: usize,
    emoji_count: usize,
    verification: String,
    features: String,
    icon_url: Option<String>,
}

async fn serverinfo_impl(ctx: Context<'_>) -> Result<(), Error> {
    let summary = {
        let guild = ctx.guild().ok_or("server data is not cached")?;

        let mut text_channels = 0;
        let mut voice_channels = 0;
        let mut categories = 0;
        for channel in guild.channels.values() {
            match channel.kind {
                ChannelType::Text | ChannelType::News => text_channels += 1,
                ChannelType::Voice | ChannelType::Stage => voice_channels += 1,
                ChannelType::Category => categories += 1,
                _ => {}
            }
        }

        let features = if guild.features.is_empty() {
            "None".to_string()
        } else {
            guild.features.join(", ")
        };

        GuildSummary {
            name: guild.name.clone(),
            id: guild.id.get(),
            owner_mention: guild.owner_id.mention().to_string(),
            created_unix: guild.id.created_at().unix_timestamp(),
            member_count: guild.member_count,
            text_channels,
            voice_channels,
            categories,
            role_count: guild.roles.len(),
            emoji_count: guild.emojis.len(),
            verification: format!("{:?}", guild.verification_level),
            features,
            icon_url: guild.icon_url(),
        }
    };

    let mut e = CreateEmbed::new()
        .title("🏠 Server Info")
        .description(format!("Information about **{}**", summary.name))
        .color(embed::EMBED_COLOR)
        .field("📝 Name", summary.name.clone(), true)
        .field("👑 Owner", summary.owner_mention, true)
        .field(
            "⏰ Created",
            embed::discord_timestamp(summary.created_unix),
            true,
        )
        .field("👥 Members", summary.member_count.to_string(), true)
        .field(
            "📺 Channels",
            format!(
                "**Text:** {}\n**Voice:** {}\n**Categories:** {}",
                summary.text_channels, summary.voice_channels, summary.categories
            ),
            true,
        )
        .field(
            "🎭 Roles / 😀 Emojis",
            format!("{} / {}", summary.role_count, summary.emoji_count),
            true,
        )
        .field("📊 Verification", summary.verification, true)
        .field("🔗 Features", summary.features, false)
        .footer(CreateEmbedFooter::new(format!("ID: {}", summary.id)));

    if let Some(icon) = summary.icon_url {
        e = e.thumbnail(icon);
    }

    ctx.send(CreateReply::default().embed(e)).await?;
    Ok(())
}

/// Shows information about the current server
#[poise::command(slash_command, guild_only)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    serverinfo_impl(ctx).await
}
