use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_users_table::User, m20260110_000002_create_events_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on (user_id, event_id): duplicate prevention is an
        // application-level pre-check only.
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_uuid(Registration::Id))
                    .col(uuid(Registration::UserId))
                    .col(uuid(Registration::EventId))
                    .col(
                        timestamp_with_time_zone(Registration::RegisteredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_user_id")
                            .from(Registration::Table, Registration::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_event_id")
                            .from(Registration::Table, Registration::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    #[sea_orm(iden = "registrations")]
    Table,
    Id,
    UserId,
    EventId,
    RegisteredAt,
}
