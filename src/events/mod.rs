pub mod component;
pub mod guild;

use poise::serenity_prelude as serenity;

use crate::{Data, Error};

pub async fn handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!(
                "{} is connected ({} guilds)",
                data_about_bot.user.name,
                data_about_bot.guilds.len()
            );
            ctx.set_activity(Some(serenity::ActivityData::watching("for interactions!")));
        }
        serenity::FullEvent::GuildCreate { guild, is_new } => {
            if is_new.unwrap_or(false) {
                tracing::info!("joined guild {} ({})", guild.name, guild.id);
                guild::welcome(ctx, guild).await?;
            }
        }
        serenity::FullEvent::GuildDelete { incomplete, .. } => {
            tracing::info!("removed from guild {}", incomplete.id);
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Component(interaction),
        } => {
            component::handle(ctx, interaction, data).await?;
        }
        _ => {}
    }
    Ok(())
}
