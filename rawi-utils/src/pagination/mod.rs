//! Reaction-driven pagination for long embed bodies.

/// Maximum characters per embed page.
pub const PAGE_CHAR_LIMIT: usize = 2040;

mod driver;
mod page;
mod respond;
mod session;

pub use driver::{PAGER_TIMEOUT, PagedView, run_pager};
pub use page::wrap_pages;
pub use respond::{add_pager_reactions, strip_pager_reactions, update_page};
pub use session::{
    CLOSE_EMOJI, NEXT_EMOJI, NavAction, PREVIOUS_EMOJI, PagerEvent, PagerSession, PagerState,
    classify_reaction,
};
