use std::slice;

use tracing::{debug, error};
use twilight_model::{
    application::interaction::{
        InteractionData,
        application_command::CommandOptionValue,
    },
    channel::Message,
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
    http::interaction::{InteractionResponse, InteractionResponseType},
};

use crate::CommandMeta;
use rawi_core::Context;
use rawi_lookup::{Biography, LookupError};
use rawi_utils::embed::build_biography_embed;
use rawi_utils::pagination::{
    PAGE_CHAR_LIMIT, PagedView, PagerSession, add_pager_reactions, run_pager, wrap_pages,
};

pub const META: CommandMeta = CommandMeta {
    name: "biography",
    desc: "View the biography of a hadith transmitter or early Muslim.",
    category: "lookup",
    usage: "!biography <name>",
};

/// Fixed card title: al-Dhahabi's Siyar A'lam al-Nubala.
const EMBED_TITLE: &str = "الذهبي - سير أعلام النبلاء";

const EXAMPLE_NAME: &str = "عبد الله بن عباس";

const MISSING_NAME_MESSAGE: &str = "**Error**: Please specify a name (in Arabic).";
const NOT_FOUND_MESSAGE: &str = "**Error**: Could not find person.";
const LOOKUP_FAILED_MESSAGE: &str =
    "**Error**: Could not read the biography page. Please try again later.";

/// Fetch and page through a biography: `!biography <name>`.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, name: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(name) = name else {
        let out = missing_name_reply("!biography");
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    };

    let biography = match ctx.lookup.fetch(name).await {
        Ok(biography) => biography,
        Err(source) => {
            let out = lookup_failure_message(&source);
            http.create_message(msg.channel_id).content(out).await?;
            return Ok(());
        }
    };

    let view = build_view(biography);
    let embed = build_biography_embed(&view.title, &view.author, &view.pages[0], 1, view.pages.len())?;

    let message = http
        .create_message(msg.channel_id)
        .embeds(slice::from_ref(&embed))
        .await?
        .model()
        .await?;

    drive_pager(&ctx, &message, view).await
}

/// Handle the `/biography name:<...>` slash command.
pub async fn run_slash(ctx: Context, interaction: Box<InteractionCreate>) -> anyhow::Result<()> {
    let client = ctx.http.interaction(interaction.application_id);

    // Acknowledge first; the two sequential fetches can outlast the
    // three-second interaction response window.
    let ack = InteractionResponse {
        kind: InteractionResponseType::DeferredChannelMessageWithSource,
        data: None,
    };
    client
        .create_response(interaction.id, &interaction.token, &ack)
        .await?;

    let Some(name) = name_option(&interaction) else {
        let out = missing_name_reply("/biography");
        client
            .update_response(&interaction.token)
            .content(Some(out.as_str()))
            .await?;
        return Ok(());
    };

    let biography = match ctx.lookup.fetch(&name).await {
        Ok(biography) => biography,
        Err(source) => {
            client
                .update_response(&interaction.token)
                .content(Some(lookup_failure_message(&source)))
                .await?;
            return Ok(());
        }
    };

    let view = build_view(biography);
    let embed = build_biography_embed(&view.title, &view.author, &view.pages[0], 1, view.pages.len())?;

    let message = client
        .update_response(&interaction.token)
        .embeds(Some(slice::from_ref(&embed)))
        .await?
        .model()
        .await?;

    drive_pager(&ctx, &message, view).await
}

fn build_view(biography: Biography) -> PagedView {
    PagedView {
        title: EMBED_TITLE.to_owned(),
        author: biography.title,
        pages: wrap_pages(&biography.body, PAGE_CHAR_LIMIT),
    }
}

async fn drive_pager(ctx: &Context, message: &Message, view: PagedView) -> anyhow::Result<()> {
    let session = PagerSession::new(message.channel_id, message.id, view.pages.len());
    add_pager_reactions(&ctx.http, &session).await?;

    let state = run_pager(&ctx.http, &ctx.standby, ctx.bot_user_id, session, &view).await?;
    debug!(?state, pages = view.pages.len(), "biography pager ended");

    Ok(())
}

/// Missing-name prompt with an example invocation for the given surface.
fn missing_name_reply(invocation: &str) -> String {
    format!("{MISSING_NAME_MESSAGE} For example: `{invocation} {EXAMPLE_NAME}`")
}

fn lookup_failure_message(source: &LookupError) -> &'static str {
    match source {
        LookupError::PersonNotFound => NOT_FOUND_MESSAGE,
        LookupError::MissingElement(_) | LookupError::Http(_) => {
            error!(?source, "biography lookup failed");
            LOOKUP_FAILED_MESSAGE
        }
    }
}

/// Pull the required `name` option out of the slash command payload.
fn name_option(interaction: &InteractionCreate) -> Option<String> {
    let Some(InteractionData::ApplicationCommand(data)) = interaction.data.as_ref() else {
        return None;
    };

    data.options
        .iter()
        .find_map(|option| match &option.value {
            CommandOptionValue::String(value) if option.name == "name" => Some(value.trim()),
            _ => None,
        })
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_reply_shows_an_example_for_each_surface() {
        let text = missing_name_reply("!biography");
        assert!(text.starts_with(MISSING_NAME_MESSAGE));
        assert!(text.contains(&format!("`!biography {EXAMPLE_NAME}`")));

        let slash = missing_name_reply("/biography");
        assert!(slash.starts_with(MISSING_NAME_MESSAGE));
        assert!(slash.contains(&format!("`/biography {EXAMPLE_NAME}`")));
    }
}
