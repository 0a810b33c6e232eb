use std::env;
use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::application::command::CommandType;
use twilight_model::gateway::event::Event;
use twilight_standby::Standby;
use twilight_util::builder::command::{CommandBuilder, StringBuilder};

use rustls::crypto::ring::default_provider;

use rawi_commands::{handle_interaction, handle_message};
use rawi_core::Context;
use rawi_lookup::BiographyClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    // Store Discord Bot Token
    let token = env::var("DISCORD_TOKEN")?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let standby = Arc::new(Standby::new());
    let lookup = BiographyClient::new();

    let bot_user = http.current_user().await?.model().await?;
    register_commands(&http).await?;

    let ctx = Context::new(Arc::clone(&http), Arc::clone(&standby), lookup, bot_user.id);

    // Declare which intents the bot has; reactions drive the biography pager
    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::MESSAGE_CONTENT
        | Intents::GUILD_MESSAGE_REACTIONS
        | Intents::DIRECT_MESSAGE_REACTIONS;

    // A shard is one Gateway WebSocket connection to Discord
    // Declare how many shards we want to be running and input our token and intents
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("Rawi is connecting...");

    // Our ears, listens for stuff to do
    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        // Feed every event to suspended pager sessions first.
        standby.process(&event);

        match event {
            Event::Ready(_) => {
                info!("Rawi has successfully awoken!");
            }

            // Handlers get their own task: a pager session can wait minutes
            // for a reaction and must not stall the shard read loop.
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "message handler failed");
                    }
                });
            }
            Event::InteractionCreate(interaction) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_interaction(ctx, interaction).await {
                        error!(?source, "interaction handler failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }
    Ok(()) // Return Success, shutdown cleanly
}

/// Register the global slash command surface.
async fn register_commands(http: &Client) -> anyhow::Result<()> {
    let application = http.current_user_application().await?.model().await?;

    let biography = CommandBuilder::new(
        "biography",
        "View the biography of a hadith transmitter or early Muslim.",
        CommandType::ChatInput,
    )
    .option(
        StringBuilder::new(
            "name",
            "The *Arabic* name of the person to fetch information for.",
        )
        .required(true),
    )
    .build();

    http.interaction(application.id)
        .set_global_commands(&[biography])
        .await?;

    info!("Global commands registered.");

    Ok(())
}
