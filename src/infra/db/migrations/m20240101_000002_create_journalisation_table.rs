//! Migration: Create the audit-log table.
//!
//! Entries belong to a citizen and disappear with it (`ON DELETE CASCADE`).

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_citoyen_table::Citoyen;

const FK_CITOYEN: &str = "fk_journalisation_citoyen";
const IDX_CITOYEN: &str = "idx_journalisation_citoyenid";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager.create_table(table(backend)).await?;
        if let Some(index) = index(backend) {
            manager.create_index(index).await?;
        }

        tracing::info!(table = "journalisation", "Table created");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Journalisation::Table).if_exists().to_owned())
            .await
    }
}

fn table(backend: DatabaseBackend) -> TableCreateStatement {
    // MySQL needs both sides of the foreign key unsigned
    let mut id = ColumnDef::new(Journalisation::Id);
    id.integer().not_null().auto_increment().primary_key();
    let mut citoyen_id = ColumnDef::new(Journalisation::Citoyenid);
    citoyen_id.integer().not_null();
    if backend == DatabaseBackend::MySql {
        id.unsigned();
        citoyen_id.unsigned();
    }

    Table::create()
        .table(Journalisation::Table)
        .if_not_exists()
        .col(&mut id)
        .col(
            ColumnDef::new(Journalisation::Date)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Journalisation::Heure)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(ColumnDef::new(Journalisation::Localisation).text())
        .col(ColumnDef::new(Journalisation::Ipadress).string_len(50))
        .col(ColumnDef::new(Journalisation::Status).boolean().default(false))
        .col(&mut citoyen_id)
        .foreign_key(
            ForeignKey::create()
                .name(FK_CITOYEN)
                .from(Journalisation::Table, Journalisation::Citoyenid)
                .to(Citoyen::Table, Citoyen::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// MySQL indexes foreign keys on its own and has no CREATE INDEX IF NOT EXISTS
fn index(backend: DatabaseBackend) -> Option<IndexCreateStatement> {
    if backend == DatabaseBackend::MySql {
        return None;
    }

    Some(
        Index::create()
            .if_not_exists()
            .name(IDX_CITOYEN)
            .table(Journalisation::Table)
            .col(Journalisation::Citoyenid)
            .to_owned(),
    )
}

#[derive(DeriveIden)]
enum Journalisation {
    Table,
    Id,
    Date,
    Heure,
    Localisation,
    Ipadress,
    Status,
    Citoyenid,
}
