use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{truncated}...")
    }
}

fn poll_row(options: &[String], disabled: bool) -> CreateActionRow {
    let buttons = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            CreateButton::new(format!("poll_{i}"))
                .label(truncate_str(&format!("{}. {option}", i + 1), 80))
                .style(ButtonStyle::Primary)
                .disabled(disabled)
        })
        .collect();
    CreateActionRow::Buttons(buttons)
}

/// One vote button per option, tagged `poll_<index>`. Up to five options,
/// so a single action row always fits.
pub fn poll_buttons(options: &[String]) -> Vec<CreateActionRow> {
    vec![poll_row(options, false)]
}

pub fn poll_buttons_disabled(options: &[String]) -> Vec<CreateActionRow> {
    vec![poll_row(options, true)]
}

pub fn ticket_open() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new("ticket_open")
        .label("Open ticket")
        .emoji('🎫')
        .style(ButtonStyle::Primary)])]
}

pub fn ticket_close() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(
        "ticket_close",
    )
    .label("Close ticket")
    .emoji('🔒')
    .style(ButtonStyle::Danger)])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 80), "short");
        let long = "x".repeat(100);
        let truncated = truncate_str(&long, 80);
        assert_eq!(truncated.chars().count(), 80);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_poll_buttons_build() {
        let options = vec!["a".into(), "b".into(), "c".into()];
        let _rows = poll_buttons(&options);
        let _rows = poll_buttons_disabled(&options);
    }
}
