use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::data::event::EventRepository;
use crate::dialogue::chat::{Chat, GuildDirectory};
use crate::error::AppError;
use crate::util::parse::{parse_duration, parse_start_time, parse_user_mention, parse_role_mention};

const CANCEL_KEYWORD: &str = "cancel";
const SKIP_KEYWORD: &str = "skip";

pub const CANCELLED_MESSAGE: &str = "Cancelled.";
pub const TIMEOUT_MESSAGE: &str =
    "You didn't respond in time, please run the command again.";
const PARSE_FAILED_MESSAGE: &str = "Please provide a response containing the correct type.";
const PAST_START_MESSAGE: &str = "Please provide a date that is in the future.";
const MISSING_ROLE_MESSAGE: &str =
    "That role does not exist, please provide a valid role.";
const NO_VALID_USERS_MESSAGE: &str =
    "You didn't provide any valid users. Either respond with \"skip\" or mention at least one user.";

/// Outcome of a single typed prompt.
pub enum PromptResult<T> {
    /// The user gave a valid answer.
    Success(T),
    /// The user replied with the cancel keyword.
    Cancelled,
    /// The user did not reply before the deadline.
    TimedOut,
    /// The user skipped an optional prompt.
    Skipped,
}

/// Pluggable duplicate check for string prompts.
#[async_trait]
pub trait UniquenessCheck: Send + Sync {
    async fn is_taken(&self, value: &str) -> Result<bool, AppError>;
}

/// Rejects short names already used by an incomplete event in the guild.
pub struct ShortNameTaken<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
}

impl<'a> ShortNameTaken<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        Self { db, guild_id }
    }
}

#[async_trait]
impl UniquenessCheck for ShortNameTaken<'_> {
    async fn is_taken(&self, value: &str) -> Result<bool, AppError> {
        Ok(EventRepository::new(self.db)
            .short_name_exists(self.guild_id, value)
            .await?)
    }
}

/// Maximum length constraint for a string prompt.
pub struct MaxLength<'a> {
    pub limit: usize,
    pub message: &'a str,
}

/// Uniqueness constraint for a string prompt.
pub struct Unique<'a> {
    pub check: &'a dyn UniquenessCheck,
    pub message: &'a str,
}

/// Whitelist constraint for a string prompt (matched case-insensitively).
pub struct Accepted<'a> {
    pub responses: &'a [&'a str],
    pub message: &'a str,
}

/// Constraints applied to a string answer, re-prompting on each violation.
#[derive(Default)]
pub struct StringOptions<'a> {
    pub max: Option<MaxLength<'a>>,
    pub unique: Option<Unique<'a>>,
    pub accepted: Option<Accepted<'a>>,
}

enum RawReply {
    Content(String),
    Cancelled,
    TimedOut,
}

/// Asks typed questions over a [`Chat`] and loops until the answer satisfies
/// every constraint, the user cancels, or the reply deadline passes.
pub struct Prompter<'a> {
    chat: &'a dyn Chat,
    directory: &'a dyn GuildDirectory,
}

impl<'a> Prompter<'a> {
    pub fn new(chat: &'a dyn Chat, directory: &'a dyn GuildDirectory) -> Self {
        Self { chat, directory }
    }

    /// Reads the next reply, handling the cancel keyword and the reply
    /// deadline in one place. Both outcomes notify the user here so callers
    /// can simply unwind.
    async fn raw_reply(&self) -> Result<RawReply, AppError> {
        match self.chat.next_reply().await? {
            Some(reply) => {
                let content = reply.content.trim().to_string();
                if content.eq_ignore_ascii_case(CANCEL_KEYWORD) {
                    self.chat.say(CANCELLED_MESSAGE).await?;
                    Ok(RawReply::Cancelled)
                } else {
                    Ok(RawReply::Content(content))
                }
            }
            None => {
                self.chat.say(TIMEOUT_MESSAGE).await?;
                Ok(RawReply::TimedOut)
            }
        }
    }

    /// Asks a free-text question.
    ///
    /// Constraints are checked in a fixed order: maximum length, then uniqueness,
    /// then the accepted-responses whitelist. The first violated constraint's
    /// message is sent and the question repeats.
    pub async fn ask_string(
        &self,
        question: &str,
        options: StringOptions<'_>,
    ) -> Result<PromptResult<String>, AppError> {
        self.chat.say(question).await?;

        loop {
            let content = match self.raw_reply().await? {
                RawReply::Content(content) => content,
                RawReply::Cancelled => return Ok(PromptResult::Cancelled),
                RawReply::TimedOut => return Ok(PromptResult::TimedOut),
            };

            if let Some(max) = &options.max {
                if content.chars().count() > max.limit {
                    self.chat.say(max.message).await?;
                    continue;
                }
            }

            if let Some(unique) = &options.unique {
                if unique.check.is_taken(&content).await? {
                    self.chat.say(unique.message).await?;
                    continue;
                }
            }

            if let Some(accepted) = &options.accepted {
                let matched = accepted
                    .responses
                    .iter()
                    .any(|r| r.eq_ignore_ascii_case(&content));
                if !matched {
                    self.chat.say(accepted.message).await?;
                    continue;
                }
            }

            return Ok(PromptResult::Success(content));
        }
    }

    /// Asks for a start time, optionally requiring it to be in the future.
    pub async fn ask_start_time(
        &self,
        question: &str,
        require_future: bool,
    ) -> Result<PromptResult<DateTime<Utc>>, AppError> {
        self.chat.say(question).await?;

        loop {
            let content = match self.raw_reply().await? {
                RawReply::Content(content) => content,
                RawReply::Cancelled => return Ok(PromptResult::Cancelled),
                RawReply::TimedOut => return Ok(PromptResult::TimedOut),
            };

            let Some(start) = parse_start_time(&content) else {
                self.chat.say(PARSE_FAILED_MESSAGE).await?;
                continue;
            };

            if require_future && start <= Utc::now() {
                self.chat.say(PAST_START_MESSAGE).await?;
                continue;
            }

            return Ok(PromptResult::Success(start));
        }
    }

    /// Asks for a duration in `HH:MM:SS` form, bounded to a sensible range.
    pub async fn ask_duration(
        &self,
        question: &str,
        min_minutes: i64,
        max_hours: i64,
        out_of_range_message: &str,
    ) -> Result<PromptResult<Duration>, AppError> {
        self.chat.say(question).await?;

        loop {
            let content = match self.raw_reply().await? {
                RawReply::Content(content) => content,
                RawReply::Cancelled => return Ok(PromptResult::Cancelled),
                RawReply::TimedOut => return Ok(PromptResult::TimedOut),
            };

            let Some(duration) = parse_duration(&content) else {
                self.chat.say(PARSE_FAILED_MESSAGE).await?;
                continue;
            };

            if duration.num_minutes() < min_minutes || duration >= Duration::hours(max_hours) {
                self.chat.say(out_of_range_message).await?;
                continue;
            }

            return Ok(PromptResult::Success(duration));
        }
    }

    /// Asks for a role mention or raw role ID; skippable.
    pub async fn ask_role(&self, question: &str) -> Result<PromptResult<u64>, AppError> {
        self.chat.say(question).await?;

        loop {
            let content = match self.raw_reply().await? {
                RawReply::Content(content) => content,
                RawReply::Cancelled => return Ok(PromptResult::Cancelled),
                RawReply::TimedOut => return Ok(PromptResult::TimedOut),
            };

            if content.eq_ignore_ascii_case(SKIP_KEYWORD) {
                return Ok(PromptResult::Skipped);
            }

            let Some(role_id) = parse_role_mention(&content) else {
                self.chat.say(PARSE_FAILED_MESSAGE).await?;
                continue;
            };

            if !self.directory.role_exists(role_id).await? {
                self.chat.say(MISSING_ROLE_MESSAGE).await?;
                continue;
            }

            return Ok(PromptResult::Success(role_id));
        }
    }

    /// Asks for one or more user mentions; skippable.
    ///
    /// Mentions that do not resolve to a guild member are dropped. An answer
    /// where nothing resolves re-prompts rather than succeeding empty.
    pub async fn ask_users(&self, question: &str) -> Result<PromptResult<Vec<u64>>, AppError> {
        self.chat.say(question).await?;

        loop {
            let content = match self.raw_reply().await? {
                RawReply::Content(content) => content,
                RawReply::Cancelled => return Ok(PromptResult::Cancelled),
                RawReply::TimedOut => return Ok(PromptResult::TimedOut),
            };

            if content.eq_ignore_ascii_case(SKIP_KEYWORD) {
                return Ok(PromptResult::Skipped);
            }

            let mut users = Vec::new();
            for word in content.split_whitespace() {
                let Some(user_id) = parse_user_mention(word) else {
                    continue;
                };
                if self.directory.member_exists(user_id).await? && !users.contains(&user_id) {
                    users.push(user_id);
                }
            }

            if users.is_empty() {
                self.chat.say(NO_VALID_USERS_MESSAGE).await?;
                continue;
            }

            return Ok(PromptResult::Success(users));
        }
    }
}
