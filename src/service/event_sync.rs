use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use serenity::model::id::{GuildId, RoleId, UserId};
use tracing::debug;

use crate::data::event::EventRepository;
use crate::error::AppError;
use crate::model::event::Event;

/// Keeps attendee role membership in sync with scheduled-event RSVPs.
///
/// Discord fires user add/remove gateway events when members mark interest in a
/// scheduled event. RSVPs to events this bot did not provision are ignored.
pub struct EventSync<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> EventSync<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Grants the event's attendee role to a member who RSVP'd.
    pub async fn rsvp_added(
        &self,
        scheduled_event_id: u64,
        user_id: u64,
    ) -> Result<(), AppError> {
        let Some(event) = self.lookup(scheduled_event_id).await? else {
            return Ok(());
        };

        self.http
            .add_member_role(
                GuildId::new(event.guild_id),
                UserId::new(user_id),
                RoleId::new(event.attendee_role_id),
                Some("Event RSVP"),
            )
            .await?;

        Ok(())
    }

    /// Removes the event's attendee role from a member who withdrew.
    pub async fn rsvp_removed(
        &self,
        scheduled_event_id: u64,
        user_id: u64,
    ) -> Result<(), AppError> {
        let Some(event) = self.lookup(scheduled_event_id).await? else {
            return Ok(());
        };

        self.http
            .remove_member_role(
                GuildId::new(event.guild_id),
                UserId::new(user_id),
                RoleId::new(event.attendee_role_id),
                Some("Event RSVP withdrawn"),
            )
            .await?;

        Ok(())
    }

    async fn lookup(&self, scheduled_event_id: u64) -> Result<Option<Event>, AppError> {
        let record = EventRepository::new(self.db)
            .get_by_id(&scheduled_event_id.to_string())
            .await?;

        match record {
            Some(record) => Ok(Some(Event::try_from(record)?)),
            None => {
                debug!("ignoring RSVP for unmanaged scheduled event {scheduled_event_id}");
                Ok(None)
            }
        }
    }
}
