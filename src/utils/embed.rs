use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::poll::{vote_bar, TallyView};

pub const EMBED_COLOR: u32 = 0x5865F2;
pub const SUCCESS_COLOR: u32 = 0x57F287;
pub const ERROR_COLOR: u32 = 0xED4245;
pub const WARNING_COLOR: u32 = 0xFEE75C;

pub fn success(title: &str, description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("✅ {title}"))
        .description(description)
        .color(SUCCESS_COLOR)
}

pub fn error(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Error")
        .description(message)
        .color(ERROR_COLOR)
}

pub fn warning(title: &str, description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("⚠️ {title}"))
        .description(description)
        .color(WARNING_COLOR)
}

/// Discord's long date-time markup for a unix timestamp.
pub fn discord_timestamp(unix: i64) -> String {
    format!("<t:{unix}:F>")
}

pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds}s"));
    }

    if parts.is_empty() {
        "0s".into()
    } else {
        parts.join(" ")
    }
}

/// Latency quality color: green under 100 ms, yellow under 200 ms, red
/// beyond.
pub fn latency_color(latency_ms: u128) -> u32 {
    if latency_ms < 100 {
        SUCCESS_COLOR
    } else if latency_ms < 200 {
        WARNING_COLOR
    } else {
        ERROR_COLOR
    }
}

pub fn poll(view: &TallyView) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("📊 Poll")
        .description(format!("**{}**\n\nClick an option to vote!", view.question))
        .color(EMBED_COLOR);

    for (i, option) in view.options.iter().enumerate() {
        embed = embed.field(
            format!("{}. {}", i + 1, option.label),
            format!(
                "`{}` {} votes ({:.1}%)",
                vote_bar(option.percent),
                option.count,
                option.percent
            ),
            false,
        );
    }

    embed.footer(CreateEmbedFooter::new(format!(
        "Poll by {} • Total votes: {}",
        view.author, view.total
    )))
}

pub fn poll_ended(view: &TallyView) -> CreateEmbed {
    poll(view)
        .description(format!("**{}**\n\nThis poll has ended.", view.question))
        .footer(CreateEmbedFooter::new(format!(
            "Poll by {} • Final votes: {}",
            view.author, view.total
        )))
}

pub fn reminder(payload: &str, created_unix: i64) -> CreateEmbed {
    CreateEmbed::new()
        .title("🔔 Reminder")
        .description(payload)
        .color(WARNING_COLOR)
        .field("Created", discord_timestamp(created_unix), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::Ballot;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(3_600), "1h");
        assert_eq!(format_uptime(90_061), "1d 1h 1m 1s");
        assert_eq!(format_uptime(86_400), "1d");
    }

    #[test]
    fn test_latency_color_thresholds() {
        assert_eq!(latency_color(42), SUCCESS_COLOR);
        assert_eq!(latency_color(150), WARNING_COLOR);
        assert_eq!(latency_color(200), ERROR_COLOR);
    }

    #[test]
    fn test_discord_timestamp() {
        assert_eq!(discord_timestamp(1_700_000_000), "<t:1700000000:F>");
    }

    #[test]
    fn test_poll_embed_creates() {
        let ballot = Ballot::new("q".into(), vec!["a".into(), "b".into()], "tester".into());
        let view = ballot.render();
        let _embed = poll(&view);
        let _embed = poll_ended(&view);
    }

    #[test]
    fn test_reminder_embed_creates() {
        let _embed = reminder("drink water", 1_700_000_000);
    }
}
