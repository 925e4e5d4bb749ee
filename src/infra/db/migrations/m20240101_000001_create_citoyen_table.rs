//! Migration: Create the citizen table.

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table(manager.get_database_backend())).await?;

        tracing::info!(table = "citoyen", "Table created");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Citoyen::Table).if_exists().to_owned())
            .await
    }
}

fn table(backend: DatabaseBackend) -> TableCreateStatement {
    let mut id = ColumnDef::new(Citoyen::Id);
    id.integer().not_null().auto_increment().primary_key();
    if backend == DatabaseBackend::MySql {
        id.unsigned();
    }

    Table::create()
        .table(Citoyen::Table)
        .if_not_exists()
        .col(&mut id)
        .col(ColumnDef::new(Citoyen::Nom).string_len(100).not_null())
        .col(ColumnDef::new(Citoyen::Prenom).string_len(100).not_null())
        .col(ColumnDef::new(Citoyen::Numerocni).string_len(20).unique_key())
        .col(ColumnDef::new(Citoyen::Photoidentite).text())
        .col(ColumnDef::new(Citoyen::Lieunaiss).string_len(100))
        .col(ColumnDef::new(Citoyen::Datenaiss).date())
        .to_owned()
}

#[derive(DeriveIden)]
pub(super) enum Citoyen {
    Table,
    Id,
    Nom,
    Prenom,
    Numerocni,
    Photoidentite,
    Lieunaiss,
    Datenaiss,
}
