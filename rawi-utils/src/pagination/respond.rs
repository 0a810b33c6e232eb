//! Message and reaction plumbing for pager sessions.

use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::{
    channel::message::EmojiReactionType,
    id::{Id, marker::UserMarker},
};

use crate::embed::build_biography_embed;

use super::driver::PagedView;
use super::session::{CLOSE_EMOJI, NEXT_EMOJI, PREVIOUS_EMOJI, PagerSession};

/// Attach the pager affordances to a freshly sent message.
///
/// Navigation arrows only appear for multi-page content; the close affordance
/// is always present.
pub async fn add_pager_reactions(http: &Client, session: &PagerSession) -> anyhow::Result<()> {
    if session.page_count > 1 {
        for name in [NEXT_EMOJI, PREVIOUS_EMOJI] {
            http.create_reaction(
                session.channel_id,
                session.message_id,
                &RequestReactionType::Unicode { name },
            )
            .await?;
        }
    }

    http.create_reaction(
        session.channel_id,
        session.message_id,
        &RequestReactionType::Unicode { name: CLOSE_EMOJI },
    )
    .await?;

    Ok(())
}

/// Re-render the message for the session's current page.
pub async fn update_page(
    http: &Client,
    session: &PagerSession,
    view: &PagedView,
) -> anyhow::Result<()> {
    let page_text = view
        .pages
        .get(session.cursor - 1)
        .map(String::as_str)
        .unwrap_or_default();

    let embed = build_biography_embed(
        &view.title,
        &view.author,
        page_text,
        session.cursor,
        session.page_count,
    )?;

    http.update_message(session.channel_id, session.message_id)
        .embeds(Some(std::slice::from_ref(&embed)))
        .await?;

    Ok(())
}

/// Remove the bot's own affordance reactions. Best effort: the message may
/// already be gone.
pub async fn strip_pager_reactions(http: &Client, session: &PagerSession) {
    for name in [NEXT_EMOJI, PREVIOUS_EMOJI, CLOSE_EMOJI] {
        let _ = http
            .delete_current_user_reaction(
                session.channel_id,
                session.message_id,
                &RequestReactionType::Unicode { name },
            )
            .await;
    }
}

/// Retract the triggering user's reaction so the pager reads like buttons.
///
/// Fails without the Manage Messages permission; not essential, so the
/// failure is swallowed.
pub async fn remove_user_reaction(
    http: &Client,
    session: &PagerSession,
    emoji: &EmojiReactionType,
    user_id: Id<UserMarker>,
) {
    let EmojiReactionType::Unicode { name } = emoji else {
        return;
    };

    let _ = http
        .delete_reaction(
            session.channel_id,
            session.message_id,
            &RequestReactionType::Unicode { name },
            user_id,
        )
        .await;
}
