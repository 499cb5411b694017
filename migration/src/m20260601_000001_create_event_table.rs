use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(string(Event::Id).primary_key())
                    .col(string(Event::GuildId))
                    .col(string(Event::OrganiserId))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(string(Event::ShortName))
                    .col(timestamp(Event::Start))
                    .col(big_integer(Event::DurationMinutes))
                    .col(string(Event::CategoryId))
                    .col(string(Event::TextChannelId))
                    .col(string(Event::VoiceChannelId))
                    .col(string(Event::ControlChannelId))
                    .col(string(Event::StewardRoleId))
                    .col(string(Event::SpeakerRoleId))
                    .col(string(Event::AttendeeRoleId))
                    .col(string(Event::CosmeticRoleId))
                    .col(string(Event::ControlPanelMessageId))
                    .col(string(Event::EventPanelMessageId))
                    .col(boolean(Event::IsCompleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    GuildId,
    OrganiserId,
    Title,
    Description,
    ShortName,
    Start,
    DurationMinutes,
    CategoryId,
    TextChannelId,
    VoiceChannelId,
    ControlChannelId,
    StewardRoleId,
    SpeakerRoleId,
    AttendeeRoleId,
    CosmeticRoleId,
    ControlPanelMessageId,
    EventPanelMessageId,
    IsCompleted,
}
