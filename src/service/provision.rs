use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateChannel, CreateMessage, CreateScheduledEvent, EditRole,
};
use serenity::http::Http;
use serenity::model::channel::{ChannelType, PermissionOverwrite, PermissionOverwriteType};
use serenity::model::guild::ScheduledEventType;
use serenity::model::id::{GuildId, RoleId, UserId};
use serenity::model::timestamp::Timestamp;
use serenity::model::Permissions;

use crate::data::event::EventRepository;
use crate::error::{internal::InternalError, AppError};
use crate::model::event::{CreateEventParams, EventDraft};

/// Discord-side resources created for a single event.
pub struct ProvisionedResources {
    pub scheduled_event_id: u64,
    pub category_id: u64,
    pub text_channel_id: u64,
    pub voice_channel_id: u64,
    pub control_channel_id: u64,
    pub steward_role_id: u64,
    pub speaker_role_id: u64,
    pub attendee_role_id: u64,
    pub control_panel_message_id: u64,
    pub event_panel_message_id: u64,
}

/// Creates the Discord-side structure for an event draft.
///
/// Implemented against the real Discord API in [`DiscordProvisioner`]; the wizard
/// only depends on this trait so its flow can be tested without a gateway.
#[async_trait]
pub trait ProvisionEvent: Send + Sync {
    async fn provision(&self, draft: &EventDraft) -> Result<ProvisionedResources, AppError>;
}

/// Provisions an event on Discord and persists the resulting record.
///
/// The database insert happens only after every Discord resource exists, so a
/// mid-provisioning failure leaves no row behind. Orphaned channels or roles
/// from a failed run are reclaimed with the clear command.
pub async fn run(
    provisioner: &dyn ProvisionEvent,
    db: &DatabaseConnection,
    draft: &EventDraft,
) -> Result<entity::event::Model, AppError> {
    let resources = provisioner.provision(draft).await?;

    let event = EventRepository::new(db)
        .create(CreateEventParams {
            id: resources.scheduled_event_id,
            guild_id: draft.guild_id,
            organiser_id: draft.organiser_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            short_name: draft.short_name.clone(),
            start: draft.start,
            duration: draft.duration,
            category_id: resources.category_id,
            text_channel_id: resources.text_channel_id,
            voice_channel_id: resources.voice_channel_id,
            control_channel_id: resources.control_channel_id,
            steward_role_id: resources.steward_role_id,
            speaker_role_id: resources.speaker_role_id,
            attendee_role_id: resources.attendee_role_id,
            cosmetic_role_id: draft.cosmetic_role_id.unwrap_or(0),
            control_panel_message_id: resources.control_panel_message_id,
            event_panel_message_id: resources.event_panel_message_id,
        })
        .await?;

    Ok(event)
}

/// [`ProvisionEvent`] backed by the Discord HTTP client.
pub struct DiscordProvisioner {
    http: Arc<Http>,
}

impl DiscordProvisioner {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn create_role(&self, guild_id: GuildId, name: String) -> Result<RoleId, AppError> {
        let role = guild_id
            .create_role(&self.http, EditRole::new().name(name).mentionable(true))
            .await?;
        Ok(role.id)
    }

    async fn assign_role(
        &self,
        guild_id: GuildId,
        user_id: u64,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, UserId::new(user_id), role_id, None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProvisionEvent for DiscordProvisioner {
    async fn provision(&self, draft: &EventDraft) -> Result<ProvisionedResources, AppError> {
        let guild_id = GuildId::new(draft.guild_id);
        let everyone = RoleId::new(draft.guild_id);
        let short = draft.short_name.as_str();

        let steward_role = self
            .create_role(guild_id, format!("{short} Steward"))
            .await?;
        let speaker_role = self
            .create_role(guild_id, format!("{short} Speaker"))
            .await?;
        let attendee_role = self
            .create_role(guild_id, format!("{short} Attendee"))
            .await?;

        // The organiser always stewards their own event.
        self.assign_role(guild_id, draft.organiser_id, steward_role)
            .await?;
        for user_id in &draft.stewards {
            if *user_id != draft.organiser_id {
                self.assign_role(guild_id, *user_id, steward_role).await?;
            }
        }
        for user_id in &draft.speakers {
            self.assign_role(guild_id, *user_id, speaker_role).await?;
        }

        let category = guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(draft.title.clone()).kind(ChannelType::Category),
            )
            .await?;

        let steward_permissions = Permissions::VIEW_CHANNEL
            | Permissions::SEND_MESSAGES
            | Permissions::MANAGE_MESSAGES
            | Permissions::CONNECT
            | Permissions::SPEAK
            | Permissions::MUTE_MEMBERS
            | Permissions::MOVE_MEMBERS
            | Permissions::PRIORITY_SPEAKER;

        let audience_overwrites = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(everyone),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL,
                deny: Permissions::SEND_MESSAGES | Permissions::CONNECT,
                kind: PermissionOverwriteType::Role(attendee_role),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL
                    | Permissions::SEND_MESSAGES
                    | Permissions::CONNECT
                    | Permissions::SPEAK,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(speaker_role),
            },
            PermissionOverwrite {
                allow: steward_permissions,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(steward_role),
            },
        ];

        let text_channel = guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(format!("{}-general", short.to_lowercase()))
                    .kind(ChannelType::Text)
                    .category(category.id)
                    .permissions(audience_overwrites.clone()),
            )
            .await?;

        let voice_channel = guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(format!("{short} Voice"))
                    .kind(ChannelType::Voice)
                    .category(category.id)
                    .permissions(audience_overwrites),
            )
            .await?;

        let control_overwrites = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(everyone),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(steward_role),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(UserId::new(draft.organiser_id)),
            },
        ];

        let control_channel = guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(format!("{}-control", short.to_lowercase()))
                    .kind(ChannelType::Text)
                    .category(category.id)
                    .permissions(control_overwrites),
            )
            .await?;

        let control_panel = control_channel
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(format!(
                        "Control panel for **{}**. Stewards only.",
                        draft.title
                    ))
                    .components(vec![
                        CreateActionRow::Buttons(vec![
                            CreateButton::new(format!("event:{short}:start")).label("Start"),
                            CreateButton::new(format!("event:{short}:stop")).label("Stop"),
                            CreateButton::new(format!("event:{short}:lock")).label("Lock"),
                        ]),
                        CreateActionRow::Buttons(vec![
                            CreateButton::new(format!("event:{short}:unlock")).label("Unlock"),
                            CreateButton::new(format!("event:{short}:mute")).label("Mute All"),
                            CreateButton::new(format!("event:{short}:unmute")).label("Unmute All"),
                        ]),
                    ]),
            )
            .await?;

        let event_panel = text_channel
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(format!(
                        "**{}**\n{}\nStarts <t:{}:F>.",
                        draft.title,
                        draft.description,
                        draft.start.timestamp()
                    ))
                    .components(vec![CreateActionRow::Buttons(vec![CreateButton::new(
                        format!("event:{short}:signup"),
                    )
                    .label("Sign Up")])]),
            )
            .await?;

        let start = discord_timestamp(draft.start.timestamp())?;
        let end = discord_timestamp((draft.start + draft.duration).timestamp())?;

        let scheduled_event = guild_id
            .create_scheduled_event(
                &self.http,
                CreateScheduledEvent::new(
                    ScheduledEventType::Voice,
                    draft.title.clone(),
                    start,
                )
                .channel_id(voice_channel.id)
                .description(draft.description.clone())
                .end_time(end),
            )
            .await?;

        Ok(ProvisionedResources {
            scheduled_event_id: scheduled_event.id.get(),
            category_id: category.id.get(),
            text_channel_id: text_channel.id.get(),
            voice_channel_id: voice_channel.id.get(),
            control_channel_id: control_channel.id.get(),
            steward_role_id: steward_role.get(),
            speaker_role_id: speaker_role.get(),
            attendee_role_id: attendee_role.get(),
            control_panel_message_id: control_panel.id.get(),
            event_panel_message_id: event_panel.id.get(),
        })
    }
}

fn discord_timestamp(unix: i64) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(unix).map_err(|err| {
        AppError::from(InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: err.to_string(),
        })
    })
}
