use std::sync::Arc;

use serenity::all::{
    Context, CreateAttachment, CreateEmbed, CreateMessage, EventHandler, Message, Ready,
};
use serenity::async_trait;
use tracing::{error, info, warn};

use super::command::{self, Command};
use crate::app::AppContext;
use crate::error::AppError;
use crate::region::Region;
use crate::render::{generate_embed, generate_visual, MasterySummary, Rendered};

const TRANSIENT_ERROR: &str = "Couldn't reach the League servers right now, please try again later.";
const CHART_FILE_NAME: &str = "mastery.png";
const WARMUP_REGION: &str = "na";

pub fn summary_embed(summary: &MasterySummary) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&summary.title)
        .url(&summary.url)
        .description(&summary.description);

    if let Some(thumbnail) = &summary.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }

    for field in &summary.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    embed
}

/// Discord bot event handler
pub struct Handler {
    context: Arc<AppContext>,
}

impl Handler {
    pub fn new(context: Arc<AppContext>) -> Self {
        Handler { context }
    }

    /// Loads champion data up front so the first lookup doesn't wait for it.
    /// A failure is only logged, lookups still refresh on demand.
    async fn warm_champion_cache(&self) {
        let Some(region) = Region::parse(WARMUP_REGION) else {
            return;
        };

        if let Err(e) = self.context.masteries.champions().refresh(region).await {
            warn!("Champion data warm-up failed: {}", e);
        }
    }

    async fn dispatch(&self, ctx: &Context, msg: &Message, command: Command) -> Result<(), AppError> {
        let service = &self.context.masteries;

        match command {
            Command::Usage => {
                msg.reply(&ctx.http, command::usage(&self.context.config.command_prefix))
                    .await?;
            }
            Command::Summary { region, name } => {
                let _typing = msg.channel_id.start_typing(&ctx.http);

                match generate_embed(service, &name, &region).await {
                    Ok(Rendered::Ready(summary)) => {
                        let message = CreateMessage::new()
                            .embed(summary_embed(&summary))
                            .reference_message(msg);
                        msg.channel_id.send_message(&ctx.http, message).await?;
                    }
                    Ok(Rendered::Failed(reason)) => {
                        msg.reply(&ctx.http, reason.to_string()).await?;
                    }
                    Err(e) => {
                        error!("Mastery summary for {} ({}) failed: {}", name, region, e);
                        msg.reply(&ctx.http, TRANSIENT_ERROR).await?;
                    }
                }
            }
            Command::Chart { region, name } => {
                let _typing = msg.channel_id.start_typing(&ctx.http);

                match generate_visual(service, &name, &region).await {
                    Ok(Rendered::Ready(png)) => {
                        let message = CreateMessage::new()
                            .add_file(CreateAttachment::bytes(png, CHART_FILE_NAME))
                            .reference_message(msg);
                        msg.channel_id.send_message(&ctx.http, message).await?;
                    }
                    Ok(Rendered::Failed(reason)) => {
                        msg.reply(&ctx.http, reason.to_string()).await?;
                    }
                    Err(e) => {
                        error!("Mastery chart for {} ({}) failed: {}", name, region, e);
                        msg.reply(&ctx.http, TRANSIENT_ERROR).await?;
                    }
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected to Discord!", ready.user.name);
        self.warm_champion_cache().await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(command) = command::parse(&msg.content, &self.context.config.command_prefix) else {
            return;
        };

        info!("{} asked for {:?}", msg.author.name, command);

        if let Err(e) = self.dispatch(&ctx, &msg, command).await {
            warn!("Failed to answer {}: {:?}", msg.author.name, e);
        }
    }
}
