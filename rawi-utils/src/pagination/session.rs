//! Pager session state and reaction classification.

use twilight_model::{
    channel::message::EmojiReactionType,
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};

/// Advances the pager. Arabic reads right to left, so the left arrow moves
/// forward through the text.
pub const NEXT_EMOJI: &str = "⬅";
/// Moves the pager back one page.
pub const PREVIOUS_EMOJI: &str = "➡";
/// Closes the pager and deletes the message.
pub const CLOSE_EMOJI: &str = "❎";

/// A navigation request decoded from a qualifying reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
    Close,
}

/// Terminal and intermediate states of a pager session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    AwaitingInput,
    Closed,
    TimedOut,
}

/// The outcome of one wait cycle: a decoded action, or the wait window
/// elapsing (timeout, or the event broker shutting down mid-wait).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEvent {
    Action(NavAction),
    Elapsed,
}

/// One pager session: a rendered message plus a 1-based page cursor.
///
/// Lives from message send until close or timeout; never persisted.
#[derive(Debug, Clone, Copy)]
pub struct PagerSession {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
    pub cursor: usize,
    pub page_count: usize,
}

impl PagerSession {
    /// Start a session on page 1.
    pub fn new(
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        page_count: usize,
    ) -> Self {
        Self {
            channel_id,
            message_id,
            cursor: 1,
            page_count: page_count.max(1),
        }
    }

    /// Move the cursor, wrapping at both ends. `Close` leaves it untouched.
    pub fn advance(&mut self, action: NavAction) {
        match action {
            NavAction::Previous => {
                self.cursor = if self.cursor <= 1 {
                    self.page_count
                } else {
                    self.cursor - 1
                };
            }
            NavAction::Next => {
                self.cursor = if self.cursor >= self.page_count {
                    1
                } else {
                    self.cursor + 1
                };
            }
            NavAction::Close => {}
        }
    }

    /// Step the state machine by one wait outcome.
    ///
    /// Navigation moves the cursor and keeps the session awaiting input;
    /// close and an elapsed wait are terminal.
    pub fn step(&mut self, event: PagerEvent) -> PagerState {
        match event {
            PagerEvent::Elapsed => PagerState::TimedOut,
            PagerEvent::Action(NavAction::Close) => PagerState::Closed,
            PagerEvent::Action(action) => {
                self.advance(action);
                PagerState::AwaitingInput
            }
        }
    }
}

/// Map a reaction emoji to a pager action, if it is one of the affordances.
pub fn classify_reaction(emoji: &EmojiReactionType) -> Option<NavAction> {
    match emoji {
        EmojiReactionType::Unicode { name } => match name.as_str() {
            PREVIOUS_EMOJI => Some(NavAction::Previous),
            NEXT_EMOJI => Some(NavAction::Next),
            CLOSE_EMOJI => Some(NavAction::Close),
            _ => None,
        },
        EmojiReactionType::Custom { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(page_count: usize) -> PagerSession {
        PagerSession::new(Id::new(1), Id::new(2), page_count)
    }

    #[test]
    fn next_walks_forward_and_wraps_to_first() {
        let mut pager = session(3);
        assert_eq!(pager.cursor, 1);

        pager.advance(NavAction::Next);
        assert_eq!(pager.cursor, 2);
        pager.advance(NavAction::Next);
        assert_eq!(pager.cursor, 3);
        pager.advance(NavAction::Next);
        assert_eq!(pager.cursor, 1);
    }

    #[test]
    fn previous_walks_back_and_wraps_to_last() {
        let mut pager = session(3);

        pager.advance(NavAction::Previous);
        assert_eq!(pager.cursor, 3);
        pager.advance(NavAction::Previous);
        assert_eq!(pager.cursor, 2);
        pager.advance(NavAction::Previous);
        assert_eq!(pager.cursor, 1);
    }

    #[test]
    fn single_page_session_stays_on_page_one() {
        let mut pager = session(1);
        pager.advance(NavAction::Next);
        assert_eq!(pager.cursor, 1);
        pager.advance(NavAction::Previous);
        assert_eq!(pager.cursor, 1);
    }

    #[test]
    fn zero_page_count_is_clamped_to_one() {
        assert_eq!(session(0).page_count, 1);
    }

    #[test]
    fn close_does_not_move_the_cursor() {
        let mut pager = session(5);
        pager.advance(NavAction::Next);
        pager.advance(NavAction::Close);
        assert_eq!(pager.cursor, 2);
    }

    #[test]
    fn elapsed_wait_times_the_session_out() {
        let mut pager = session(3);
        pager.advance(NavAction::Next);

        assert_eq!(pager.step(PagerEvent::Elapsed), PagerState::TimedOut);
        // Terminal step; the cursor stays where navigation left it.
        assert_eq!(pager.cursor, 2);
    }

    #[test]
    fn close_step_is_terminal() {
        let mut pager = session(3);
        assert_eq!(
            pager.step(PagerEvent::Action(NavAction::Close)),
            PagerState::Closed
        );
    }

    #[test]
    fn navigation_steps_keep_the_session_awaiting_input() {
        let mut pager = session(2);

        assert_eq!(
            pager.step(PagerEvent::Action(NavAction::Next)),
            PagerState::AwaitingInput
        );
        assert_eq!(pager.cursor, 2);

        assert_eq!(
            pager.step(PagerEvent::Action(NavAction::Next)),
            PagerState::AwaitingInput
        );
        assert_eq!(pager.cursor, 1);
    }

    #[test]
    fn left_arrow_advances_and_right_arrow_goes_back() {
        let left = EmojiReactionType::Unicode {
            name: NEXT_EMOJI.to_owned(),
        };
        let right = EmojiReactionType::Unicode {
            name: PREVIOUS_EMOJI.to_owned(),
        };
        let close = EmojiReactionType::Unicode {
            name: CLOSE_EMOJI.to_owned(),
        };

        assert_eq!(classify_reaction(&left), Some(NavAction::Next));
        assert_eq!(classify_reaction(&right), Some(NavAction::Previous));
        assert_eq!(classify_reaction(&close), Some(NavAction::Close));
    }

    #[test]
    fn unrelated_reactions_are_not_actions() {
        let thumbs = EmojiReactionType::Unicode {
            name: "👍".to_owned(),
        };
        assert_eq!(classify_reaction(&thumbs), None);

        let custom = EmojiReactionType::Custom {
            animated: false,
            id: Id::new(9),
            name: None,
        };
        assert_eq!(classify_reaction(&custom), None);
    }
}
