use serenity::model::id::{MessageId, UserId};

use super::{Ballot, PollManager, TallyView};

pub enum CastOutcome {
    /// The vote was applied; the view reflects it.
    Updated(TallyView),
    /// The ballot's voting window has expired; the view is the final tally.
    Ended(TallyView),
    /// No ballot is tracked for this message (restart, or a stale id).
    Untracked,
}

pub async fn register(manager: &PollManager, message_id: MessageId, ballot: Ballot) {
    let mut polls = manager.write().await;
    polls.insert(message_id, ballot);
}

/// Applies a vote and snapshots the tally as one unit. Holding the write
/// lock across both steps keeps concurrent casts from interleaving their
/// mutate-then-render sequences.
pub async fn cast(
    manager: &PollManager,
    message_id: MessageId,
    voter: UserId,
    option_index: usize,
) -> CastOutcome {
    let mut polls = manager.write().await;
    let Some(ballot) = polls.get_mut(&message_id) else {
        return CastOutcome::Untracked;
    };

    if ballot.is_closed() {
        let view = ballot.render();
        polls.remove(&message_id);
        return CastOutcome::Ended(view);
    }

    if ballot.cast(voter, option_index) {
        CastOutcome::Updated(ballot.render())
    } else {
        CastOutcome::Untracked
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::poll::new_poll_manager;

    fn sample_ballot(open_for: Duration) -> Ballot {
        Ballot::with_open_for(
            "q".into(),
            vec!["a".into(), "b".into()],
            "tester".into(),
            open_for,
        )
    }

    #[tokio::test]
    async fn test_cast_updates_tracked_ballot() {
        let manager = new_poll_manager();
        let message_id = MessageId::new(10);
        register(&manager, message_id, sample_ballot(Duration::from_secs(60))).await;

        match cast(&manager, message_id, UserId::new(1), 1).await {
            CastOutcome::Updated(view) => {
                assert_eq!(view.total, 1);
                assert_eq!(view.options[1].count, 1);
            }
            _ => panic!("expected Updated"),
        }
    }

    #[tokio::test]
    async fn test_cast_on_expired_ballot_ends_and_removes() {
        let manager = new_poll_manager();
        let message_id = MessageId::new(11);
        register(&manager, message_id, sample_ballot(Duration::ZERO)).await;

        assert!(matches!(
            cast(&manager, message_id, UserId::new(1), 0).await,
            CastOutcome::Ended(_)
        ));
        // The expired ballot is dropped; a second vote finds nothing.
        assert!(matches!(
            cast(&manager, message_id, UserId::new(1), 0).await,
            CastOutcome::Untracked
        ));
    }

    #[tokio::test]
    async fn test_cast_on_unknown_message() {
        let manager = new_poll_manager();
        assert!(matches!(
            cast(&manager, MessageId::new(12), UserId::new(1), 0).await,
            CastOutcome::Untracked
        ));
    }
}
