//! Domain models for event data operations.
//!
//! Defines the event domain model, the in-progress draft accumulated by the
//! dialogue, and the parameter type used when persisting a provisioned event.

use chrono::{DateTime, Duration, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A provisioned event with all of its Discord-side resource ids resolved.
///
/// Converted from the entity model at the repository boundary; snowflake id
/// columns are parsed back into `u64`. A `cosmetic_role_id` of zero means the
/// event has no cosmetic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The Discord scheduled-event id, which doubles as the record key.
    pub id: u64,
    pub guild_id: u64,
    pub organiser_id: u64,
    pub title: String,
    pub description: String,
    /// Guild-unique (among incomplete events) short name used as a prefix
    /// for the event's channels and roles.
    pub short_name: String,
    pub start: DateTime<Utc>,
    pub duration: Duration,
    pub category_id: u64,
    pub text_channel_id: u64,
    pub voice_channel_id: u64,
    pub control_channel_id: u64,
    pub steward_role_id: u64,
    pub speaker_role_id: u64,
    pub attendee_role_id: u64,
    pub cosmetic_role_id: u64,
    pub control_panel_message_id: u64,
    pub event_panel_message_id: u64,
    pub is_completed: bool,
}

impl TryFrom<entity::event::Model> for Event {
    type Error = AppError;

    fn try_from(entity: entity::event::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_u64_from_string(entity.id)?,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            organiser_id: parse_u64_from_string(entity.organiser_id)?,
            title: entity.title,
            description: entity.description,
            short_name: entity.short_name,
            start: entity.start,
            duration: Duration::minutes(entity.duration_minutes),
            category_id: parse_u64_from_string(entity.category_id)?,
            text_channel_id: parse_u64_from_string(entity.text_channel_id)?,
            voice_channel_id: parse_u64_from_string(entity.voice_channel_id)?,
            control_channel_id: parse_u64_from_string(entity.control_channel_id)?,
            steward_role_id: parse_u64_from_string(entity.steward_role_id)?,
            speaker_role_id: parse_u64_from_string(entity.speaker_role_id)?,
            attendee_role_id: parse_u64_from_string(entity.attendee_role_id)?,
            cosmetic_role_id: parse_u64_from_string(entity.cosmetic_role_id)?,
            control_panel_message_id: parse_u64_from_string(entity.control_panel_message_id)?,
            event_panel_message_id: parse_u64_from_string(entity.event_panel_message_id)?,
            is_completed: entity.is_completed,
        })
    }
}

/// The in-progress, not-yet-committed set of answers collected during the
/// event dialogue. Built incrementally; discarded on any failure.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub guild_id: u64,
    pub organiser_id: u64,
    pub title: String,
    pub description: String,
    pub short_name: String,
    pub start: DateTime<Utc>,
    pub duration: Duration,
    /// Users to receive the steward role, deduplicated, insertion order.
    pub stewards: Vec<u64>,
    /// Users to receive the speaker role, deduplicated, insertion order.
    pub speakers: Vec<u64>,
    /// Existing role to hand out to attendees as a cosmetic, if any.
    pub cosmetic_role_id: Option<u64>,
}

/// Parameters for persisting a freshly provisioned event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    /// The Discord scheduled-event id assigned during provisioning.
    pub id: u64,
    pub guild_id: u64,
    pub organiser_id: u64,
    pub title: String,
    pub description: String,
    pub short_name: String,
    pub start: DateTime<Utc>,
    pub duration: Duration,
    pub category_id: u64,
    pub text_channel_id: u64,
    pub voice_channel_id: u64,
    pub control_channel_id: u64,
    pub steward_role_id: u64,
    pub speaker_role_id: u64,
    pub attendee_role_id: u64,
    /// Zero when the event has no cosmetic role.
    pub cosmetic_role_id: u64,
    pub control_panel_message_id: u64,
    pub event_panel_message_id: u64,
}
