use sea_orm::DatabaseConnection;
use serenity::builder::{EditMember, EditScheduledEvent};
use serenity::client::Context;
use serenity::model::channel::{PermissionOverwrite, PermissionOverwriteType};
use serenity::model::guild::ScheduledEventStatus;
use serenity::model::id::{ChannelId, GuildId, RoleId, ScheduledEventId, UserId};
use serenity::model::Permissions;

use crate::data::event::EventRepository;
use crate::error::AppError;
use crate::model::event::Event;

/// A button press on an event panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Start,
    Stop,
    Lock,
    Unlock,
    Mute,
    Unmute,
    SignUp,
}

impl PanelAction {
    /// Whether the action is restricted to the event's stewards and organiser.
    fn steward_only(self) -> bool {
        !matches!(self, PanelAction::SignUp)
    }
}

/// Parses a panel button custom id of the form `event:<short_name>:<action>`.
pub fn parse_custom_id(custom_id: &str) -> Option<(String, PanelAction)> {
    let mut parts = custom_id.splitn(3, ':');
    if parts.next()? != "event" {
        return None;
    }
    let short_name = parts.next()?;
    let action = match parts.next()? {
        "start" => PanelAction::Start,
        "stop" => PanelAction::Stop,
        "lock" => PanelAction::Lock,
        "unlock" => PanelAction::Unlock,
        "mute" => PanelAction::Mute,
        "unmute" => PanelAction::Unmute,
        "signup" => PanelAction::SignUp,
        _ => return None,
    };
    Some((short_name.to_string(), action))
}

/// Performs a panel action for a button presser.
///
/// # Arguments
/// - `presser_roles`: Role IDs held by the member who pressed the button
///
/// # Returns
/// - `Ok(reply)`: Text to show the presser in an ephemeral response
pub async fn handle(
    ctx: &Context,
    db: &DatabaseConnection,
    guild_id: u64,
    presser_id: u64,
    presser_roles: &[u64],
    custom_id: &str,
) -> Result<&'static str, AppError> {
    let Some((short_name, action)) = parse_custom_id(custom_id) else {
        return Ok("That button isn't wired to anything.");
    };

    let record = EventRepository::new(db)
        .get_by_short_name(guild_id, &short_name)
        .await?;
    let Some(record) = record else {
        return Ok("That event no longer exists.");
    };
    let event = Event::try_from(record)?;

    if action.steward_only()
        && presser_id != event.organiser_id
        && !presser_roles.contains(&event.steward_role_id)
    {
        return Ok("Only the event's stewards can use this panel.");
    }

    let guild = GuildId::new(event.guild_id);

    match action {
        PanelAction::Start => {
            guild
                .edit_scheduled_event(
                    &ctx.http,
                    ScheduledEventId::new(event.id),
                    EditScheduledEvent::new().status(ScheduledEventStatus::Active),
                )
                .await?;
            Ok("Event started.")
        }
        PanelAction::Stop => {
            guild
                .edit_scheduled_event(
                    &ctx.http,
                    ScheduledEventId::new(event.id),
                    EditScheduledEvent::new().status(ScheduledEventStatus::Completed),
                )
                .await?;
            EventRepository::new(db)
                .update_completion(&event.id.to_string(), true)
                .await?;
            Ok("Event stopped. Its short name is free to reuse.")
        }
        PanelAction::Lock => {
            set_speaker_access(ctx, &event, false).await?;
            Ok("Event locked; speakers can no longer join or talk.")
        }
        PanelAction::Unlock => {
            set_speaker_access(ctx, &event, true).await?;
            Ok("Event unlocked.")
        }
        PanelAction::Mute => {
            set_voice_mute(ctx, &event, true).await?;
            Ok("Muted everyone in the event voice channel.")
        }
        PanelAction::Unmute => {
            set_voice_mute(ctx, &event, false).await?;
            Ok("Unmuted everyone in the event voice channel.")
        }
        PanelAction::SignUp => {
            ctx.http
                .add_member_role(
                    guild,
                    UserId::new(presser_id),
                    RoleId::new(event.attendee_role_id),
                    Some("Event sign-up"),
                )
                .await?;
            Ok("You're signed up! You now have the event's attendee role.")
        }
    }
}

/// Opens or closes the event voice channel for the speaker role.
async fn set_speaker_access(ctx: &Context, event: &Event, open: bool) -> Result<(), AppError> {
    let overwrite = if open {
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL
                | Permissions::SEND_MESSAGES
                | Permissions::CONNECT
                | Permissions::SPEAK,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(RoleId::new(event.speaker_role_id)),
        }
    } else {
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL,
            deny: Permissions::SEND_MESSAGES | Permissions::CONNECT | Permissions::SPEAK,
            kind: PermissionOverwriteType::Role(RoleId::new(event.speaker_role_id)),
        }
    };

    ChannelId::new(event.voice_channel_id)
        .create_permission(&ctx.http, overwrite)
        .await?;

    Ok(())
}

/// Server-mutes or unmutes every non-steward member currently in the event
/// voice channel.
async fn set_voice_mute(ctx: &Context, event: &Event, mute: bool) -> Result<(), AppError> {
    let guild = GuildId::new(event.guild_id);
    let voice_channel = ChannelId::new(event.voice_channel_id);
    let steward_role = RoleId::new(event.steward_role_id);

    let targets: Vec<UserId> = match ctx.cache.guild(guild) {
        Some(guild) => guild
            .voice_states
            .iter()
            .filter(|(_, state)| state.channel_id == Some(voice_channel))
            .filter(|(_, state)| {
                state
                    .member
                    .as_ref()
                    .map_or(true, |member| !member.roles.contains(&steward_role))
            })
            .map(|(user_id, _)| *user_id)
            .collect(),
        None => Vec::new(),
    };

    for user_id in targets {
        guild
            .edit_member(&ctx.http, user_id, EditMember::new().mute(mute))
            .await?;
    }

    Ok(())
}
