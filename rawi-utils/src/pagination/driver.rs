//! The pager loop: one task per session, suspended on the next qualifying
//! reaction or the timeout, whichever comes first.

use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;
use twilight_http::Client;
use twilight_model::{
    gateway::payload::incoming::ReactionAdd,
    id::{Id, marker::UserMarker},
};
use twilight_standby::Standby;

use super::respond::{remove_user_reaction, strip_pager_reactions, update_page};
use super::session::{PagerEvent, PagerSession, PagerState, classify_reaction};

/// How long a session waits for the next qualifying reaction. Resets after
/// every handled reaction.
pub const PAGER_TIMEOUT: Duration = Duration::from_secs(180);

/// The paged content a session renders from.
#[derive(Debug, Clone)]
pub struct PagedView {
    pub title: String,
    pub author: String,
    pub pages: Vec<String>,
}

/// Drive a pager session until it is closed or times out.
///
/// A qualifying reaction is one of the three affordance emojis, on this exact
/// message, from any actor other than the bot itself. Everything else is left
/// alone for other sessions.
pub async fn run_pager(
    http: &Client,
    standby: &Standby,
    bot_user_id: Id<UserMarker>,
    mut session: PagerSession,
    view: &PagedView,
) -> anyhow::Result<PagerState> {
    loop {
        let wait = standby.wait_for_reaction(session.message_id, move |event: &ReactionAdd| {
            event.user_id != bot_user_id && classify_reaction(&event.emoji).is_some()
        });

        let (event, reaction) = match timeout(PAGER_TIMEOUT, wait).await {
            Ok(Ok(reaction)) => match classify_reaction(&reaction.emoji) {
                Some(action) => (PagerEvent::Action(action), Some(reaction)),
                None => continue,
            },
            // A canceled waiter means the standby is shutting down; treated
            // the same as a timeout.
            Ok(Err(_)) | Err(_) => (PagerEvent::Elapsed, None),
        };

        match session.step(event) {
            PagerState::TimedOut => {
                strip_pager_reactions(http, &session).await;
                return Ok(PagerState::TimedOut);
            }
            PagerState::Closed => {
                http.delete_message(session.channel_id, session.message_id)
                    .await?;
                return Ok(PagerState::Closed);
            }
            PagerState::AwaitingInput => {
                debug!(cursor = session.cursor, "pager advanced");
                update_page(http, &session, view).await?;
                if let Some(reaction) = reaction {
                    remove_user_reaction(http, &session, &reaction.emoji, reaction.user_id).await;
                }
            }
        }
    }
}
