use sea_orm::DatabaseConnection;
use tracing::error;

use crate::data::permitted_role::PermittedRoleRepository;
use crate::dialogue::chat::{Chat, GuildDirectory};
use crate::dialogue::prompt::{
    MaxLength, PromptResult, Prompter, ShortNameTaken, StringOptions, Unique,
};
use crate::error::AppError;
use crate::model::event::EventDraft;
use crate::service::provision::{self, ProvisionEvent};
use crate::util::parse::humanize_duration;

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 1000;
pub const SHORT_NAME_MAX: usize = 12;
pub const MIN_DURATION_MINUTES: i64 = 10;
pub const MAX_DURATION_HOURS: i64 = 24;

const MAX_GUILD_CHANNELS: u64 = 500;
const MAX_GUILD_ROLES: u64 = 250;
const CHANNEL_MARGIN: u64 = 3;
const ROLE_MARGIN: u64 = 4;

const ACCESS_DENIED_MESSAGE: &str =
    "You don't have permission to create events on this server.";
const CHANNEL_CAPACITY_MESSAGE: &str =
    "This server is too close to the channel limit to fit another event.";
const ROLE_CAPACITY_MESSAGE: &str =
    "This server is too close to the role limit to fit another event.";
const PROVISIONING_STATUS: &str = "Setting everything up for you...";
const PROVISIONING_FAILED: &str =
    "Something went wrong while setting up the event. Please try again later.";

/// Who invoked the wizard, with everything admission needs already resolved.
pub struct Invoker {
    pub user_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub is_admin: bool,
    pub role_ids: Vec<u64>,
}

/// Current channel and role usage of the guild, for the capacity check.
pub struct GuildUsage {
    pub channel_count: u64,
    pub role_count: u64,
}

/// Walks an invoker through the event creation dialogue and provisions the
/// result.
///
/// The wizard owns no Discord state itself; it talks through [`Chat`] and
/// [`GuildDirectory`] and hands the finished draft to a [`ProvisionEvent`]
/// implementation. Nothing is created on Discord or in the database until
/// every answer has been collected.
pub struct EventWizard<'a> {
    db: &'a DatabaseConnection,
    chat: &'a dyn Chat,
    directory: &'a dyn GuildDirectory,
    provisioner: &'a dyn ProvisionEvent,
    require_future_start: bool,
}

impl<'a> EventWizard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        chat: &'a dyn Chat,
        directory: &'a dyn GuildDirectory,
        provisioner: &'a dyn ProvisionEvent,
        require_future_start: bool,
    ) -> Self {
        Self {
            db,
            chat,
            directory,
            provisioner,
            require_future_start,
        }
    }

    /// Runs the full dialogue. Returns `Ok(())` whether or not an event was
    /// created; refusals, cancels, and timeouts are normal outcomes that have
    /// already been reported to the user.
    pub async fn run(&self, invoker: &Invoker, usage: &GuildUsage) -> Result<(), AppError> {
        if !self.is_permitted(invoker).await? {
            self.chat.say(ACCESS_DENIED_MESSAGE).await?;
            return Ok(());
        }

        if usage.channel_count + CHANNEL_MARGIN > MAX_GUILD_CHANNELS {
            self.chat.say(CHANNEL_CAPACITY_MESSAGE).await?;
            return Ok(());
        }
        if usage.role_count + ROLE_MARGIN > MAX_GUILD_ROLES {
            self.chat.say(ROLE_CAPACITY_MESSAGE).await?;
            return Ok(());
        }

        let Some(draft) = self.collect_draft(invoker).await? else {
            return Ok(());
        };

        let status = self.chat.send_status(PROVISIONING_STATUS).await?;

        match provision::run(self.provisioner, self.db, &draft).await {
            Ok(event) => {
                self.chat
                    .edit_status(
                        status,
                        &format!(
                            "**{}** is ready! It runs for {} starting <t:{}:F>.",
                            event.title,
                            humanize_duration(draft.duration),
                            draft.start.timestamp()
                        ),
                    )
                    .await?;
            }
            Err(err) => {
                error!("event provisioning failed: {err}");
                self.chat.edit_status(status, PROVISIONING_FAILED).await?;
            }
        }

        Ok(())
    }

    async fn is_permitted(&self, invoker: &Invoker) -> Result<bool, AppError> {
        if invoker.is_admin {
            return Ok(true);
        }

        let permitted = PermittedRoleRepository::new(self.db)
            .get_all_by_guild(invoker.guild_id)
            .await?;

        Ok(permitted
            .iter()
            .any(|p| invoker.role_ids.iter().any(|r| r.to_string() == p.role_id)))
    }

    /// Collects every answer into a draft. `None` means the dialogue ended
    /// early (cancel or timeout) and the user has already been told.
    async fn collect_draft(&self, invoker: &Invoker) -> Result<Option<EventDraft>, AppError> {
        let prompter = Prompter::new(self.chat, self.directory);

        let title = match prompter
            .ask_string(
                "What would you like to call the event?",
                StringOptions {
                    max: Some(MaxLength {
                        limit: TITLE_MAX,
                        message: "Please provide a title that is 200 characters or fewer.",
                    }),
                    ..Default::default()
                },
            )
            .await?
        {
            PromptResult::Success(title) => title,
            other => return self.ended_early(other),
        };

        let description = match prompter
            .ask_string(
                "Give the event a description.",
                StringOptions {
                    max: Some(MaxLength {
                        limit: DESCRIPTION_MAX,
                        message: "Please provide a description that is 1000 characters or fewer.",
                    }),
                    ..Default::default()
                },
            )
            .await?
        {
            PromptResult::Success(description) => description,
            other => return self.ended_early(other),
        };

        let short_name_taken = ShortNameTaken::new(self.db, invoker.guild_id);
        let short_name = match prompter
            .ask_string(
                "Give the event a short name, used to tag its channels and roles.",
                StringOptions {
                    max: Some(MaxLength {
                        limit: SHORT_NAME_MAX,
                        message: "Please provide a short name that is 12 characters or fewer.",
                    }),
                    unique: Some(Unique {
                        check: &short_name_taken,
                        message:
                            "An event with that short name already exists, please pick another.",
                    }),
                    ..Default::default()
                },
            )
            .await?
        {
            PromptResult::Success(short_name) => short_name,
            other => return self.ended_early(other),
        };

        let start = match prompter
            .ask_start_time(
                "When does the event start? (e.g. `12/31/2030 20:00:00`)",
                self.require_future_start,
            )
            .await?
        {
            PromptResult::Success(start) => start,
            other => return self.ended_early(other),
        };

        let duration = match prompter
            .ask_duration(
                "How long does the event run? (`HH:MM:SS`)",
                MIN_DURATION_MINUTES,
                MAX_DURATION_HOURS,
                "Please provide a duration between 10 minutes and 24 hours.",
            )
            .await?
        {
            PromptResult::Success(duration) => duration,
            other => return self.ended_early(other),
        };

        let stewards = match prompter
            .ask_users("Mention any users who should help run the event, or say `skip`.")
            .await?
        {
            PromptResult::Success(stewards) => stewards,
            PromptResult::Skipped => Vec::new(),
            other => return self.ended_early(other),
        };

        let speakers = match prompter
            .ask_users("Mention any users who should be able to speak, or say `skip`.")
            .await?
        {
            PromptResult::Success(speakers) => speakers,
            PromptResult::Skipped => Vec::new(),
            other => return self.ended_early(other),
        };

        // Handing out an arbitrary existing role is an admin privilege.
        let cosmetic_role_id = if invoker.is_admin {
            match prompter
                .ask_role("Mention a cosmetic role to give attendees, or say `skip`.")
                .await?
            {
                PromptResult::Success(role_id) => Some(role_id),
                PromptResult::Skipped => None,
                other => return self.ended_early(other),
            }
        } else {
            None
        };

        Ok(Some(EventDraft {
            guild_id: invoker.guild_id,
            organiser_id: invoker.user_id,
            title,
            description,
            short_name,
            start,
            duration,
            stewards,
            speakers,
            cosmetic_role_id,
        }))
    }

    /// The prompt layer has already told the user why the dialogue ended.
    fn ended_early<T, U>(&self, _result: PromptResult<T>) -> Result<Option<U>, AppError> {
        Ok(None)
    }
}
