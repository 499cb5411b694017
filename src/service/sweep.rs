use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use serenity::model::id::GuildId;
use tracing::info;

use crate::data::event::EventRepository;
use crate::error::AppError;

/// What a sweep removed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub channels_deleted: u64,
    pub roles_deleted: u64,
    pub events_deleted: u64,
}

/// Deletes every channel and role whose name starts with `prefix`, plus any
/// incomplete event records whose short name matches.
///
/// This is the cleanup path for provisioning runs that failed partway: there
/// is no automatic rollback, so an admin sweeps the orphaned resources by the
/// short-name prefix they were tagged with. Matching is case-insensitive.
pub async fn clear_by_prefix(
    http: &Arc<Http>,
    db: &DatabaseConnection,
    guild_id: u64,
    prefix: &str,
) -> Result<SweepSummary, AppError> {
    let prefix = prefix.to_lowercase();
    let guild = GuildId::new(guild_id);
    let mut summary = SweepSummary::default();

    let channels = guild.channels(http).await?;
    for (channel_id, channel) in channels {
        if channel.name.to_lowercase().starts_with(&prefix) {
            channel_id.delete(http).await?;
            summary.channels_deleted += 1;
        }
    }

    let roles = guild.roles(http).await?;
    for (role_id, role) in roles {
        if role.name.to_lowercase().starts_with(&prefix) {
            guild.delete_role(http, role_id).await?;
            summary.roles_deleted += 1;
        }
    }

    let repository = EventRepository::new(db);
    for event in repository.get_by_completion(guild_id, false).await? {
        if event.short_name.to_lowercase().starts_with(&prefix) {
            if repository.delete(&event.id).await? {
                summary.events_deleted += 1;
            }
        }
    }

    info!(
        "sweep of prefix {prefix:?} in guild {guild_id} removed {} channels, {} roles, {} events",
        summary.channels_deleted, summary.roles_deleted, summary.events_deleted
    );

    Ok(summary)
}
