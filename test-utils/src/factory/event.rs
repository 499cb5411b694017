//! Event factory for creating test event entities.
//!
//! This module provides factory methods for creating event entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Provides a builder pattern for creating event entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, "guild_123")
///     .short_name("LP1")
///     .title("Launch Party")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    guild_id: String,
    organiser_id: String,
    title: String,
    description: String,
    short_name: String,
    start: chrono::DateTime<Utc>,
    duration_minutes: i64,
    attendee_role_id: String,
    is_completed: bool,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented snowflake-like string
    /// - title: `"Event {id}"`
    /// - short_name: `"EV{id}"`
    /// - start: 1 day from now
    /// - duration_minutes: 60
    /// - is_completed: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID the event belongs to
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: (900_000_000 + id).to_string(),
            guild_id: guild_id.into(),
            organiser_id: (100_000 + id).to_string(),
            title: format!("Event {}", id),
            description: "Test event description".to_string(),
            short_name: format!("EV{}", id),
            start: Utc::now() + chrono::Duration::days(1),
            duration_minutes: 60,
            attendee_role_id: (500_000 + id).to_string(),
            is_completed: false,
        }
    }

    /// Sets the event id (the scheduled-event snowflake).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the organiser id.
    pub fn organiser_id(mut self, organiser_id: impl Into<String>) -> Self {
        self.organiser_id = organiser_id.into();
        self
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event short name.
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Sets the event start time.
    pub fn start(mut self, start: chrono::DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    /// Sets the event duration in minutes.
    pub fn duration_minutes(mut self, duration_minutes: i64) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the attendee role id.
    pub fn attendee_role_id(mut self, attendee_role_id: impl Into<String>) -> Self {
        self.attendee_role_id = attendee_role_id.into();
        self
    }

    /// Sets the completion flag.
    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Inserts the configured event into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created event entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let id = next_id();
        entity::event::ActiveModel {
            id: ActiveValue::Set(self.id),
            guild_id: ActiveValue::Set(self.guild_id),
            organiser_id: ActiveValue::Set(self.organiser_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            short_name: ActiveValue::Set(self.short_name),
            start: ActiveValue::Set(self.start),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            category_id: ActiveValue::Set((600_000 + id).to_string()),
            text_channel_id: ActiveValue::Set((610_000 + id).to_string()),
            voice_channel_id: ActiveValue::Set((620_000 + id).to_string()),
            control_channel_id: ActiveValue::Set((630_000 + id).to_string()),
            steward_role_id: ActiveValue::Set((510_000 + id).to_string()),
            speaker_role_id: ActiveValue::Set((520_000 + id).to_string()),
            attendee_role_id: ActiveValue::Set(self.attendee_role_id),
            cosmetic_role_id: ActiveValue::Set("0".to_string()),
            control_panel_message_id: ActiveValue::Set((700_000 + id).to_string()),
            event_panel_message_id: ActiveValue::Set((710_000 + id).to_string()),
            is_completed: ActiveValue::Set(self.is_completed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the event belongs to
///
/// # Returns
/// - `Ok(Model)` - The created event entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, guild_id).build().await
}
