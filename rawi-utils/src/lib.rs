/// Generic embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Reaction-driven pagination: text wrapping, session state, pager loop.
pub mod pagination;
