use poise::CreateReply;

use crate::poll::{registry, Ballot};
use crate::utils::{components, embed};
use crate::{Context, Error};

async fn poll_impl(
    ctx: Context<'_>,
    question: String,
    option1: String,
    option2: String,
    option3: Option<String>,
    option4: Option<String>,
    option5: Option<String>,
) -> Result<(), Error> {
    let options: Vec<String> = [Some(option1), Some(option2), option3, option4, option5]
        .into_iter()
        .flatten()
        .collect();

    let ballot = Ballot::new(
        question,
        options,
        ctx.author().display_name().to_string(),
    );
    let view = ballot.render();

    let handle = ctx
        .send(
            CreateReply::default()
                .embed(embed::poll(&view))
                .components(components::poll_buttons(ballot.option_labels())),
        )
        .await?;
    let message = handle.message().await?;

    registry::register(&ctx.data().polls, message.id, ballot).await;
    Ok(())
}

/// Runs a poll with up to five options
#[poise::command(slash_command, guild_only)]
pub async fn poll(
    ctx: Context<'_>,
    #[description = "The question to ask"] question: String,
    #[description = "First option"] option1: String,
    #[description = "Second option"] option2: String,
    #[description = "Third option"] option3: Option<String>,
    #[description = "Fourth option"] option4: Option<String>,
    #[description = "Fifth option"] option5: Option<String>,
) -> Result<(), Error> {
    poll_impl(ctx, question, option1, option2, option3, option4, option5).await
}
