use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(text(Leads::Id).primary_key())
                    .col(string(Leads::Name))
                    .col(string_null(Leads::Email))
                    .col(string_null(Leads::Phone))
                    .col(string(Leads::Company))
                    .col(text_null(Leads::Address))
                    .col(string(Leads::Status))
                    .col(string_null(Leads::Source))
                    .col(text_null(Leads::AssignedTo))
                    .col(text_null(Leads::Notes))
                    .col(
                        timestamp_with_time_zone(Leads::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Leads::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_leads_assigned_to")
                    .table(Leads::Table)
                    .col(Leads::AssignedTo)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Leads {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Company,
    Address,
    Status,
    Source,
    AssignedTo,
    Notes,
    CreatedAt,
    UpdatedAt,
}
