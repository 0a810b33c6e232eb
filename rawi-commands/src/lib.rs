pub mod lookup;

use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
};

use rawi_core::Context;
use rawi_utils::COMMAND_PREFIX;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    lookup::biography::META,
    // Add new commands here
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content_owned = msg.content.clone();
    let content = content_owned.trim();

    if !content.starts_with(COMMAND_PREFIX) {
        return Ok(());
    }

    let content = content.trim_start_matches(COMMAND_PREFIX).trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();

    // The whole remainder of the line is the argument; names contain spaces.
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match cmd.as_str() {
        "biography" => lookup::biography::run(ctx.clone(), msg, rest).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let Some(InteractionData::ApplicationCommand(data)) = interaction.data.as_ref() else {
        return Ok(());
    };

    match data.name.as_str() {
        "biography" => lookup::biography::run_slash(ctx.clone(), interaction).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}
