use sea_orm::entity::prelude::*;

/// An event provisioned in a guild.
///
/// The primary key is the Discord scheduled-event id assigned when the event
/// was provisioned. Snowflake ids are stored as strings; `"0"` marks an
/// absent cosmetic role.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub guild_id: String,
    pub organiser_id: String,
    pub title: String,
    pub description: String,
    pub short_name: String,
    pub start: DateTimeUtc,
    pub duration_minutes: i64,
    pub category_id: String,
    pub text_channel_id: String,
    pub voice_channel_id: String,
    pub control_channel_id: String,
    pub steward_role_id: String,
    pub speaker_role_id: String,
    pub attendee_role_id: String,
    pub cosmetic_role_id: String,
    pub control_panel_message_id: String,
    pub event_panel_message_id: String,
    pub is_completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
