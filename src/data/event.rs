use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use sea_orm::sea_query::{Expr, ExprTrait, Func};

use crate::model::event::CreateEventParams;

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event record from fully resolved parameters
    ///
    /// # Arguments
    /// - `params`: All event fields, with Discord IDs already provisioned
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateEventParams,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Set(params.id.to_string()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            organiser_id: ActiveValue::Set(params.organiser_id.to_string()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            short_name: ActiveValue::Set(params.short_name),
            start: ActiveValue::Set(params.start),
            duration_minutes: ActiveValue::Set(params.duration.num_minutes()),
            category_id: ActiveValue::Set(params.category_id.to_string()),
            text_channel_id: ActiveValue::Set(params.text_channel_id.to_string()),
            voice_channel_id: ActiveValue::Set(params.voice_channel_id.to_string()),
            control_channel_id: ActiveValue::Set(params.control_channel_id.to_string()),
            steward_role_id: ActiveValue::Set(params.steward_role_id.to_string()),
            speaker_role_id: ActiveValue::Set(params.speaker_role_id.to_string()),
            attendee_role_id: ActiveValue::Set(params.attendee_role_id.to_string()),
            cosmetic_role_id: ActiveValue::Set(params.cosmetic_role_id.to_string()),
            control_panel_message_id: ActiveValue::Set(params.control_panel_message_id.to_string()),
            event_panel_message_id: ActiveValue::Set(params.event_panel_message_id.to_string()),
            is_completed: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await
    }

    /// Gets an event by its scheduled event ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The event
    /// - `Ok(None)`: Event not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: &str) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets all events across all guilds, ordered by start time (upcoming first)
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Start)
            .all(self.db)
            .await
    }

    /// Gets all events for a guild, ordered by start time (upcoming first)
    pub async fn get_all_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::event::Column::Start)
            .all(self.db)
            .await
    }

    /// Gets all events for a guild filtered by completion state
    pub async fn get_by_completion(
        &self,
        guild_id: u64,
        is_completed: bool,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::event::Column::IsCompleted.eq(is_completed))
            .order_by_asc(entity::event::Column::Start)
            .all(self.db)
            .await
    }

    /// Gets an incomplete event in a guild by its short name (case-insensitive)
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: A running or upcoming event with this short name
    /// - `Ok(None)`: No incomplete event uses this short name
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_short_name(
        &self,
        guild_id: u64,
        short_name: &str,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::event::Column::IsCompleted.eq(false))
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::event::Column::ShortName)))
                    .eq(short_name.to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Checks whether a short name is already in use by an incomplete event in a guild.
    /// Completed events release their short name for reuse.
    pub async fn short_name_exists(
        &self,
        guild_id: u64,
        short_name: &str,
    ) -> Result<bool, DbErr> {
        Ok(self.get_by_short_name(guild_id, short_name).await?.is_some())
    }

    /// Updates the event organiser
    pub async fn update_organiser(
        &self,
        id: &str,
        organiser_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.organiser_id = ActiveValue::Set(organiser_id.to_string());
        })
        .await
    }

    /// Updates the event title
    pub async fn update_title(
        &self,
        id: &str,
        title: String,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.title = ActiveValue::Set(title);
        })
        .await
    }

    /// Updates the event description
    pub async fn update_description(
        &self,
        id: &str,
        description: String,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.description = ActiveValue::Set(description);
        })
        .await
    }

    /// Updates the event start time
    pub async fn update_start(
        &self,
        id: &str,
        start: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.start = ActiveValue::Set(start);
        })
        .await
    }

    /// Updates the event duration
    pub async fn update_duration(
        &self,
        id: &str,
        duration: chrono::Duration,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.duration_minutes = ActiveValue::Set(duration.num_minutes());
        })
        .await
    }

    /// Updates the category channel ID
    pub async fn update_category(
        &self,
        id: &str,
        category_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.category_id = ActiveValue::Set(category_id.to_string());
        })
        .await
    }

    /// Updates the text channel ID
    pub async fn update_text_channel(
        &self,
        id: &str,
        text_channel_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.text_channel_id = ActiveValue::Set(text_channel_id.to_string());
        })
        .await
    }

    /// Updates the voice channel ID
    pub async fn update_voice_channel(
        &self,
        id: &str,
        voice_channel_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.voice_channel_id = ActiveValue::Set(voice_channel_id.to_string());
        })
        .await
    }

    /// Updates the control channel ID
    pub async fn update_control_channel(
        &self,
        id: &str,
        control_channel_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.control_channel_id = ActiveValue::Set(control_channel_id.to_string());
        })
        .await
    }

    /// Updates the steward role ID
    pub async fn update_steward_role(
        &self,
        id: &str,
        steward_role_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.steward_role_id = ActiveValue::Set(steward_role_id.to_string());
        })
        .await
    }

    /// Updates the speaker role ID
    pub async fn update_speaker_role(
        &self,
        id: &str,
        speaker_role_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.speaker_role_id = ActiveValue::Set(speaker_role_id.to_string());
        })
        .await
    }

    /// Updates the attendee role ID
    pub async fn update_attendee_role(
        &self,
        id: &str,
        attendee_role_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.attendee_role_id = ActiveValue::Set(attendee_role_id.to_string());
        })
        .await
    }

    /// Updates the cosmetic role ID ("0" when the event has none)
    pub async fn update_cosmetic_role(
        &self,
        id: &str,
        cosmetic_role_id: u64,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.cosmetic_role_id = ActiveValue::Set(cosmetic_role_id.to_string());
        })
        .await
    }

    /// Marks an event as completed or reopens it
    pub async fn update_completion(
        &self,
        id: &str,
        is_completed: bool,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        self.update_with(id, |event| {
            event.is_completed = ActiveValue::Set(is_completed);
        })
        .await
    }

    /// Deletes an event record
    ///
    /// # Returns
    /// - `Ok(true)`: Event deleted
    /// - `Ok(false)`: Event not found
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Applies a single-field mutation to an event if it exists
    async fn update_with<F>(
        &self,
        id: &str,
        apply: F,
    ) -> Result<Option<entity::event::Model>, DbErr>
    where
        F: FnOnce(&mut entity::event::ActiveModel),
    {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut event: entity::event::ActiveModel = event.into();
        apply(&mut event);

        Ok(Some(event.update(self.db).await?))
    }
}
