use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tracing::info;

use super::handler::Handler;
use crate::app::AppContext;
use crate::error::AppError;

/// Connects to Discord and serves commands until the gateway shuts down.
///
/// Requires `DISCORD_TOKEN` in the environment.
pub async fn start_bot(context: Arc<AppContext>) -> Result<(), AppError> {
    let token = context.config.require_discord_token()?.to_string();

    // MESSAGE_CONTENT is privileged, enable it in the Discord Developer Portal
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(context))
        .await?;

    info!("Starting Discord bot...");
    client.start().await?;

    Ok(())
}
