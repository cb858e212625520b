use std::time::{Duration, Instant};

use guildkeeper::utils::embed;
use guildkeeper::{commands, config, events, poll, Data, Error};
use poise::serenity_prelude as serenity;
use poise::CreateReply;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env();
    let presence_interval = config.presence_interval_secs;

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    "{} is ready with {} commands",
                    ready.user.name,
                    framework.options().commands.len()
                );

                spawn_presence_rotation(ctx.clone(), presence_interval);

                Ok(Data {
                    polls: poll::new_poll_manager(),
                    started_at: Instant::now(),
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .expect("failed to create Discord client");

    if let Err(e) = client.start().await {
        tracing::error!("client error: {e}");
    }
}

/// Cycles the displayed activity through a fixed list, one step per
/// interval. The task owns its cursor; nothing else touches presence.
fn spawn_presence_rotation(ctx: serenity::Context, interval_secs: u64) {
    tokio::spawn(async move {
        let activities = [
            serenity::ActivityData::watching("for interactions!"),
            serenity::ActivityData::listening("/help"),
            serenity::ActivityData::playing("with polls and tickets"),
        ];
        let mut cursor = 0;
        loop {
            tokio::time::sleep(Duration::from_secs(interval_secs)).await;
            ctx.set_activity(Some(activities[cursor].clone()));
            cursor = (cursor + 1) % activities.len();
        }
    });
}

/// Maps framework faults to ephemeral notices. A failure stays scoped to
/// the one command invocation that raised it.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("command /{} failed: {error}", ctx.command().qualified_name);
            let reply = CreateReply::default()
                .embed(embed::error(
                    "Something went wrong while running this command. Try again.",
                ))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("failed to report command error: {e}");
            }
        }
        poise::FrameworkError::MissingUserPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            let detail = match missing_permissions {
                Some(p) => format!("You need the following permissions: **{p}**"),
                None => "You do not have permission to use this command.".to_string(),
            };
            let reply = CreateReply::default()
                .embed(embed::error(&detail))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("failed to report permission error: {e}");
            }
        }
        poise::FrameworkError::MissingBotPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            let reply = CreateReply::default()
                .embed(embed::error(&format!(
                    "I am missing the following permissions: **{missing_permissions}**"
                )))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("failed to report permission error: {e}");
            }
        }
        poise::FrameworkError::GuildOnly { ctx, .. } => {
            let reply = CreateReply::default()
                .embed(embed::error("This command can only be used in a server."))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("failed to report guild-only error: {e}");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("error handler failed: {e}");
            }
        }
    }
}
