use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(text(Employees::Id).primary_key())
                    .col(string(Employees::Name))
                    .col(string(Employees::Mobile).unique_key())
                    .col(string(Employees::Role))
                    .col(string(Employees::Department))
                    .col(string(Employees::Designation))
                    .col(string(Employees::MemberId).unique_key())
                    .col(
                        timestamp_with_time_zone(Employees::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Employees::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_role")
                    .table(Employees::Table)
                    .col(Employees::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    Name,
    Mobile,
    Role,
    Department,
    Designation,
    MemberId,
    CreatedAt,
    UpdatedAt,
}
