use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct PermittedRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermittedRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants a role permission to run event provisioning commands
    ///
    /// # Returns
    /// - `Ok(Model)`: The created permission record
    /// - `Err(DbErr)`: Database error (including duplicate grants)
    pub async fn create(
        &self,
        guild_id: u64,
        role_id: u64,
    ) -> Result<entity::permitted_role::Model, DbErr> {
        entity::permitted_role::ActiveModel {
            role_id: ActiveValue::Set(role_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
        }
        .insert(self.db)
        .await
    }

    /// Revokes a role's permission
    ///
    /// # Returns
    /// - `Ok(true)`: Permission revoked
    /// - `Ok(false)`: Role was not permitted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, role_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::PermittedRole::delete_by_id(role_id.to_string())
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets all permitted roles for a guild
    pub async fn get_all_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::permitted_role::Model>, DbErr> {
        entity::prelude::PermittedRole::find()
            .filter(entity::permitted_role::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await
    }

    /// Checks whether a specific role is permitted
    pub async fn exists(&self, role_id: u64) -> Result<bool, DbErr> {
        Ok(
            entity::prelude::PermittedRole::find_by_id(role_id.to_string())
                .one(self.db)
                .await?
                .is_some(),
        )
    }
}
