pub mod registry;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serenity::model::id::{MessageId, UserId};
use tokio::sync::RwLock;

/// How long a poll accepts votes after it is posted.
pub const OPEN_FOR: Duration = Duration::from_secs(300);

const BAR_CELLS: usize = 10;

/// Vote tally for one poll message. A voter occupies at most one option
/// list at any time; `cast` is a no-op once `closes_at` has passed.
pub struct Ballot {
    pub question: String,
    pub author: String,
    options: Vec<String>,
    votes: Vec<Vec<UserId>>,
    closes_at: Instant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionTally {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Snapshot of a ballot, taken under the registry lock so it never shows
/// a partially applied vote.
#[derive(Clone, Debug)]
pub struct TallyView {
    pub question: String,
    pub author: String,
    pub options: Vec<OptionTally>,
    pub total: usize,
}

impl Ballot {
    pub fn new(question: String, options: Vec<String>, author: String) -> Self {
        Self::with_open_for(question, options, author, OPEN_FOR)
    }

    pub fn with_open_for(
        question: String,
        options: Vec<String>,
        author: String,
        open_for: Duration,
    ) -> Self {
        let votes = vec![Vec::new(); options.len()];
        Self {
            question,
            author,
            options,
            votes,
            closes_at: Instant::now() + open_for,
        }
    }

    pub fn is_closed(&self) -> bool {
        Instant::now() >= self.closes_at
    }

    pub fn option_labels(&self) -> &[String] {
        &self.options
    }

    /// Records `voter`'s choice, displacing any earlier vote they cast.
    /// Returns false when the ballot is closed or the index is out of range.
    pub fn cast(&mut self, voter: UserId, option_index: usize) -> bool {
        if self.is_closed() || option_index >= self.options.len() {
            return false;
        }
        for list in &mut self.votes {
            list.retain(|v| *v != voter);
        }
        self.votes[option_index].push(voter);
        true
    }

    pub fn render(&self) -> TallyView {
        let total: usize = self.votes.iter().map(Vec::len).sum();
        let options = self
            .options
            .iter()
            .zip(&self.votes)
            .map(|(label, voters)| {
                let count = voters.len();
                let percent = if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                };
                OptionTally {
                    label: label.clone(),
                    count,
                    percent,
                }
            })
            .collect();
        TallyView {
            question: self.question.clone(),
            author: self.author.clone(),
            options,
            total,
        }
    }
}

/// Ten-cell proportional bar, one filled cell per full 10%.
pub fn vote_bar(percent: f64) -> String {
    let filled = ((percent / 10.0).floor() as usize).min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// Decodes the option index from a `poll_<n>` component id.
pub fn parse_option_id(custom_id: &str) -> Option<usize> {
    custom_id.strip_prefix("poll_")?.parse().ok()
}

pub type PollManager = Arc<RwLock<HashMap<MessageId, Ballot>>>;

pub fn new_poll_manager() -> PollManager {
    Arc::new(RwLock::new(HashMap::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ballot() -> Ballot {
        Ballot::new(
            "Best season?".into(),
            vec!["Spring".into(), "Summer".into(), "Winter".into()],
            "tester".into(),
        )
    }

    #[test]
    fn test_cast_is_exclusive() {
        let mut ballot = sample_ballot();
        let voter = UserId::new(1);
        assert!(ballot.cast(voter, 0));
        assert!(ballot.cast(voter, 2));

        let view = ballot.render();
        assert_eq!(view.options[0].count, 0);
        assert_eq!(view.options[2].count, 1);
        assert_eq!(view.total, 1);
    }

    #[test]
    fn test_revote_same_option_is_idempotent() {
        let mut ballot = sample_ballot();
        let voter = UserId::new(7);
        assert!(ballot.cast(voter, 1));
        assert!(ballot.cast(voter, 1));

        let view = ballot.render();
        assert_eq!(view.options[1].count, 1);
        assert_eq!(view.total, 1);
    }

    #[test]
    fn test_render_counts_and_percentages() {
        let mut ballot = sample_ballot();
        ballot.cast(UserId::new(1), 0);
        ballot.cast(UserId::new(2), 0);
        ballot.cast(UserId::new(3), 0);
        ballot.cast(UserId::new(4), 1);

        let view = ballot.render();
        let count_sum: usize = view.options.iter().map(|o| o.count).sum();
        let percent_sum: f64 = view.options.iter().map(|o| o.percent).sum();
        assert_eq!(count_sum, view.total);
        assert_eq!(view.total, 4);
        assert!((percent_sum - 100.0).abs() < 1e-9);
        assert_eq!(view.options[0].count, 3);
        assert!((view.options[0].percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_zero_votes() {
        let ballot = sample_ballot();
        let view = ballot.render();
        assert_eq!(view.total, 0);
        for option in &view.options {
            assert_eq!(option.count, 0);
            assert_eq!(option.percent, 0.0);
        }
    }

    #[test]
    fn test_cast_rejected_after_cutoff() {
        let mut ballot = Ballot::with_open_for(
            "q".into(),
            vec!["a".into(), "b".into()],
            "tester".into(),
            Duration::ZERO,
        );
        assert!(ballot.is_closed());
        assert!(!ballot.cast(UserId::new(1), 0));
        assert_eq!(ballot.render().total, 0);
    }

    #[test]
    fn test_cast_out_of_range_is_ignored() {
        let mut ballot = sample_ballot();
        assert!(!ballot.cast(UserId::new(1), 3));
        assert_eq!(ballot.render().total, 0);
    }

    #[test]
    fn test_vote_bar_fill() {
        assert_eq!(vote_bar(0.0), "░░░░░░░░░░");
        assert_eq!(vote_bar(35.0), "███░░░░░░░");
        assert_eq!(vote_bar(100.0), "██████████");
    }

    #[test]
    fn test_parse_option_id() {
        assert_eq!(parse_option_id("poll_0"), Some(0));
        assert_eq!(parse_option_id("poll_4"), Some(4));
        assert_eq!(parse_option_id("poll_x"), None);
        assert_eq!(parse_option_id("ticket_open"), None);
    }
}
