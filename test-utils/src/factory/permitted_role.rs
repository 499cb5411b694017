//! Permitted role factory for creating test permitted-role entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a permitted-role entry for a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `role_id` - Discord role ID granted permission
///
/// # Returns
/// - `Ok(Model)` - The created permitted-role entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_permitted_role(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    role_id: impl Into<String>,
) -> Result<entity::permitted_role::Model, DbErr> {
    entity::permitted_role::ActiveModel {
        role_id: ActiveValue::Set(role_id.into()),
        guild_id: ActiveValue::Set(guild_id.into()),
    }
    .insert(db)
    .await
}
