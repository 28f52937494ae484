use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(text(Customers::Id).primary_key())
                    .col(string(Customers::Name))
                    .col(string_null(Customers::Email))
                    .col(string_null(Customers::Phone))
                    .col(string(Customers::Company))
                    .col(text_null(Customers::Address))
                    .col(string(Customers::Status))
                    .col(double(Customers::TotalValue).default(0.0))
                    .col(
                        timestamp_with_time_zone(Customers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Customers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Company,
    Address,
    Status,
    TotalValue,
    CreatedAt,
    UpdatedAt,
}
