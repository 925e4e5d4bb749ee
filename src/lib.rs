//! Registre Civil - Database administration for the civil registry.
//!
//! Creates the `citoyen` and `journalisation` tables and loads sample
//! citizens whose identity photos live on an image host.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment configuration, DSN parsing and constants
//! - **domain**: Citizen and audit-log entities
//! - **services**: Seeding use case
//! - **infra**: Database, migrations, repositories and the image host
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the tables
//! cargo run -- migrate up
//!
//! # Load the sample citizens
//! cargo run -- seed
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Citoyen, Journalisation, NewCitoyen, NewJournalisation};
pub use errors::{AppError, AppResult};
pub use infra::Database;
