use poise::serenity_prelude as serenity;
use serenity::builder::{
    CreateActionRow, CreateChannel, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::ComponentInteraction;
use serenity::model::channel::{ChannelType, PermissionOverwrite, PermissionOverwriteType};
use serenity::model::id::RoleId;
use serenity::model::mention::Mentionable;
use serenity::model::permissions::Permissions;

use crate::poll::registry::{self, CastOutcome};
use crate::utils::{components, embed};
use crate::{poll, Data, Error};

async fn respond_ephemeral(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn update_message(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

pub async fn handle(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let custom_id = interaction.data.custom_id.as_str();

    if let Some(option_index) = poll::parse_option_id(custom_id) {
        return vote(ctx, interaction, data, option_index).await;
    }

    match custom_id {
        "ticket_open" => open_ticket(ctx, interaction).await,
        "ticket_close" => close_ticket(ctx, interaction).await,
        _ => Ok(()),
    }
}

/// Applies one vote and refreshes the tally for everyone watching the
/// poll message.
async fn vote(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    option_index: usize,
) -> Result<(), Error> {
    let outcome = registry::cast(
        &data.polls,
        interaction.message.id,
        interaction.user.id,
        option_index,
    )
    .await;

    match outcome {
        CastOutcome::Updated(view) => {
            let labels: Vec<String> = view.options.iter().map(|o| o.label.clone()).collect();
            update_message(
                ctx,
                interaction,
                embed::poll(&view),
                components::poll_buttons(&labels),
            )
            .await
        }
        CastOutcome::Ended(view) => {
            let labels: Vec<String> = view.options.iter().map(|o| o.label.clone()).collect();
            update_message(
                ctx,
                interaction,
                embed::poll_ended(&view),
                components::poll_buttons_disabled(&labels),
            )
            .await
        }
        CastOutcome::Untracked => {
            respond_ephemeral(ctx, interaction, embed::error("This poll is no longer active."))
                .await
        }
    }
}

async fn open_ticket(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
) -> Result<(), Error> {
    let Some(guild_id) = interaction.guild_id else {
        return respond_ephemeral(
            ctx,
            interaction,
            embed::error("Tickets can only be opened in a server."),
        )
        .await;
    };
    let user = &interaction.user;

    // @everyone shares the guild's id.
    let overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL
                | Permissions::SEND_MESSAGES
                | Permissions::READ_MESSAGE_HISTORY,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(user.id),
        },
    ];

    let builder = CreateChannel::new(format!("ticket-{}", user.name))
        .kind(ChannelType::Text)
        .permissions(overwrites);

    match guild_id.create_channel(&ctx.http, builder).await {
        Ok(channel) => {
            channel
                .send_message(
                    &ctx.http,
                    CreateMessage::new()
                        .content(format!("Ticket opened by {}", user.mention()))
                        .components(components::ticket_close()),
                )
                .await?;
            respond_ephemeral(
                ctx,
                interaction,
                embed::success("Ticket created", &format!("Head over to {}", channel.mention())),
            )
            .await
        }
        Err(e) => {
            tracing::warn!("ticket channel creation in {guild_id} failed: {e}");
            respond_ephemeral(
                ctx,
                interaction,
                embed::error("I was unable to create a ticket channel."),
            )
            .await
        }
    }
}

async fn close_ticket(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
) -> Result<(), Error> {
    // Acknowledge before the channel (and the interaction with it) goes away.
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    if let Err(e) = interaction.channel_id.delete(&ctx.http).await {
        tracing::warn!("ticket channel {} deletion failed: {e}", interaction.channel_id);
    }
    Ok(())
}
