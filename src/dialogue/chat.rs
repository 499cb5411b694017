use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serenity::builder::EditMessage;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};

use crate::dialogue::waiter::{MessageDispatcher, WaitResult};
use crate::error::AppError;

/// A user's reply within a dialogue.
pub struct Reply {
    pub content: String,
}

/// Conversational surface a dialogue runs over.
///
/// Prompts and the wizard speak through this trait rather than the Discord HTTP client
/// directly, so dialogue logic can be exercised against a scripted implementation.
#[async_trait]
pub trait Chat: Send + Sync {
    /// Sends a message to the dialogue channel.
    async fn say(&self, content: &str) -> Result<(), AppError>;

    /// Waits for the invoking user's next message in the dialogue channel.
    ///
    /// # Returns
    /// - `Ok(Some(Reply))`: The user replied before the deadline
    /// - `Ok(None)`: The deadline passed
    async fn next_reply(&self) -> Result<Option<Reply>, AppError>;

    /// Sends a progress message and returns its ID for later editing.
    async fn send_status(&self, content: &str) -> Result<u64, AppError>;

    /// Replaces the content of a previously sent progress message.
    async fn edit_status(&self, message_id: u64, content: &str) -> Result<(), AppError>;
}

/// Read-only view of the guild used to validate dialogue answers.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    async fn role_exists(&self, role_id: u64) -> Result<bool, AppError>;
    async fn member_exists(&self, user_id: u64) -> Result<bool, AppError>;
}

/// [`Chat`] backed by the Discord HTTP client and the shared message dispatcher.
pub struct DiscordChat {
    http: Arc<Http>,
    dispatcher: Arc<MessageDispatcher>,
    user_id: u64,
    channel_id: u64,
    timeout: Duration,
}

impl DiscordChat {
    pub fn new(
        http: Arc<Http>,
        dispatcher: Arc<MessageDispatcher>,
        user_id: u64,
        channel_id: u64,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            dispatcher,
            user_id,
            channel_id,
            timeout,
        }
    }
}

#[async_trait]
impl Chat for DiscordChat {
    async fn say(&self, content: &str) -> Result<(), AppError> {
        ChannelId::new(self.channel_id)
            .say(&self.http, content)
            .await?;
        Ok(())
    }

    async fn next_reply(&self) -> Result<Option<Reply>, AppError> {
        match self
            .dispatcher
            .await_reply(self.user_id, self.channel_id, self.timeout)
            .await
        {
            WaitResult::Message(message) => Ok(Some(Reply {
                content: message.content.clone(),
            })),
            WaitResult::TimedOut => Ok(None),
        }
    }

    async fn send_status(&self, content: &str) -> Result<u64, AppError> {
        let message = ChannelId::new(self.channel_id)
            .say(&self.http, content)
            .await?;
        Ok(message.id.get())
    }

    async fn edit_status(&self, message_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(self.channel_id)
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new().content(content),
            )
            .await?;
        Ok(())
    }
}

/// [`GuildDirectory`] backed by the Discord HTTP client.
pub struct DiscordDirectory {
    http: Arc<Http>,
    guild_id: u64,
}

impl DiscordDirectory {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl GuildDirectory for DiscordDirectory {
    async fn role_exists(&self, role_id: u64) -> Result<bool, AppError> {
        let roles = GuildId::new(self.guild_id).roles(&self.http).await?;
        Ok(roles.contains_key(&RoleId::new(role_id)))
    }

    async fn member_exists(&self, user_id: u64) -> Result<bool, AppError> {
        match GuildId::new(self.guild_id)
            .member(&self.http, UserId::new(user_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}
