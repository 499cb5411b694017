use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use serenity::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::event::{GuildScheduledEventUserAddEvent, GuildScheduledEventUserRemoveEvent};
use serenity::model::gateway::{GatewayIntents, Ready};

use crate::bot::handler;
use crate::config::Config;
use crate::dialogue::waiter::MessageDispatcher;
use crate::error::AppError;

/// Runtime options derived from configuration.
pub struct BotOptions {
    pub prefix: String,
    pub reply_timeout: Duration,
    pub require_future_start: bool,
}

/// State shared by every event handler invocation.
pub struct BotState {
    pub db: DatabaseConnection,
    pub dispatcher: Arc<MessageDispatcher>,
    pub options: BotOptions,
}

pub struct Handler {
    state: Arc<BotState>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        handler::ready::handle(&ctx, &ready).await;
    }

    async fn message(&self, ctx: Context, message: Message) {
        handler::message::handle(&self.state, &ctx, &message).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        handler::interaction::handle(&self.state, &ctx, interaction).await;
    }

    async fn guild_scheduled_event_user_add(
        &self,
        ctx: Context,
        event: GuildScheduledEventUserAddEvent,
    ) {
        handler::scheduled_event::user_added(&self.state, &ctx, &event).await;
    }

    async fn guild_scheduled_event_user_remove(
        &self,
        ctx: Context,
        event: GuildScheduledEventUserRemoveEvent,
    ) {
        handler::scheduled_event::user_removed(&self.state, &ctx, &event).await;
    }
}

/// Builds the gateway client with the intents the bot needs.
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    let state = Arc::new(BotState {
        db,
        dispatcher: Arc::new(MessageDispatcher::new()),
        options: BotOptions {
            prefix: config.command_prefix.clone(),
            reply_timeout: Duration::from_secs(config.reply_timeout_secs),
            require_future_start: config.require_future_start,
        },
    });

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_SCHEDULED_EVENTS;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler { state })
        .await
        .map_err(Box::new)?;

    Ok(client)
}

/// Runs the gateway connection until it stops.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    client.start().await.map_err(Box::new)?;
    Ok(())
}
