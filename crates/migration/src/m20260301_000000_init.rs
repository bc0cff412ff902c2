//! Initial schema migration.
//!
//! - `users`: people who can attend events, provisioned externally
//! - `events`: scheduled activities, each tagged with a category
//! - `scans`: one attendance record per (`net_id`, `event_id`) pair

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    NetId,
    FirstName,
    LastName,
    Email,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
    Title,
    Kind,
    Notes,
    StartTime,
    EndTime,
    Location,
    CreatedBy,
    CreatedDate,
    EditedBy,
    EditDate,
    WaiverUrl,
}

#[derive(Iden)]
enum Scans {
    Table,
    NetId,
    EventId,
    ScannerId,
    Timestamp,
    PlusOne,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::NetId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Kind).string().not_null())
                    .col(ColumnDef::new(Events::Notes).string())
                    .col(ColumnDef::new(Events::StartTime).timestamp().not_null())
                    .col(ColumnDef::new(Events::EndTime).timestamp().not_null())
                    .col(ColumnDef::new(Events::Location).string().not_null())
                    .col(ColumnDef::new(Events::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Events::CreatedDate).timestamp().not_null())
                    .col(ColumnDef::new(Events::EditedBy).string().not_null())
                    .col(ColumnDef::new(Events::EditDate).timestamp().not_null())
                    .col(ColumnDef::new(Events::WaiverUrl).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-events-start_time")
                    .table(Events::Table)
                    .col(Events::StartTime)
                    .to_owned(),
            )
            .await?;

        // The composite primary key is what rejects a second scan of the
        // same user at the same event.
        manager
            .create_table(
                Table::create()
                    .table(Scans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scans::NetId).string().not_null())
                    .col(ColumnDef::new(Scans::EventId).string().not_null())
                    .col(ColumnDef::new(Scans::ScannerId).string().not_null())
                    .col(ColumnDef::new(Scans::Timestamp).timestamp().not_null())
                    .col(
                        ColumnDef::new(Scans::PlusOne)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .primary_key(Index::create().col(Scans::NetId).col(Scans::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-scans-net_id")
                            .from(Scans::Table, Scans::NetId)
                            .to(Users::Table, Users::NetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-scans-event_id")
                            .from(Scans::Table, Scans::EventId)
                            .to(Events::Table, Events::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-scans-event_id")
                    .table(Scans::Table)
                    .col(Scans::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scans::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
