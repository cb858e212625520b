use std::sync::Arc;
use std::time::Duration;

use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use serenity::model::mention::Mentionable;
use serenity::model::user::User;

use crate::utils::embed;

/// Longest accepted reminder delay: 7 days.
pub const MAX_DURATION_SECS: u64 = 604_800;

/// A one-shot delayed notification. Held only by its delivery task; a
/// process restart loses it.
pub struct PendingReminder {
    pub requester: User,
    pub fallback_channel: ChannelId,
    pub payload: String,
    pub delay: Duration,
    pub created_unix: i64,
}

/// Range validation is separate from parsing: the parser accepts any
/// positive total and the submission path rejects totals over the cap.
pub fn within_limit(seconds: u64) -> bool {
    seconds <= MAX_DURATION_SECS
}

/// Schedules delivery. The task sleeps until the reminder is due, tries a
/// DM, then falls back to the source channel with a mention. Both faults
/// are logged and swallowed; nothing is retried.
pub fn spawn(http: Arc<Http>, reminder: PendingReminder) {
    tokio::spawn(async move {
        deliver(http, reminder).await;
    });
}

async fn deliver(http: Arc<Http>, reminder: PendingReminder) {
    tokio::time::sleep(reminder.delay).await;

    let notice = embed::reminder(&reminder.payload, reminder.created_unix);

    let direct = reminder
        .requester
        .direct_message(&http, CreateMessage::new().embed(notice.clone()))
        .await;

    if let Err(dm_err) = direct {
        tracing::warn!(
            "reminder DM to {} failed, falling back to channel: {dm_err}",
            reminder.requester.id
        );
        let fallback = reminder
            .fallback_channel
            .send_message(
                &http,
                CreateMessage::new()
                    .content(reminder.requester.mention().to_string())
                    .embed(notice),
            )
            .await;
        if let Err(ch_err) = fallback {
            tracing::warn!(
                "reminder fallback to channel {} failed, dropping: {ch_err}",
                reminder.fallback_channel
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit_boundary() {
        assert!(within_limit(1));
        assert!(within_limit(MAX_DURATION_SECS));
        assert!(!within_limit(MAX_DURATION_SECS + 1));
    }
}
