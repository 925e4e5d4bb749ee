//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}
//!
//! Identifiers are lowercase so PostgreSQL, MySQL and SQLite all expose the
//! same column names (`lieunaiss`, `datenaiss`, `citoyenid`).

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_citoyen_table;
mod m20240101_000002_create_journalisation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_citoyen_table::Migration),
            Box::new(m20240101_000002_create_journalisation_table::Migration),
        ]
    }
}
