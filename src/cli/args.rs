//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Civil registry administration: schema migrations and sample data
#[derive(Parser, Debug)]
#[command(name = "registre")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Load the sample citizens and their identity photos
    Seed(SeedArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Directory holding the sample photos (created if missing)
    #[arg(long)]
    pub images_dir: Option<PathBuf>,

    /// Remote folder the photos are uploaded into
    #[arg(long)]
    pub folder: Option<String>,

    /// Skip samples whose card number is already stored
    #[arg(long)]
    pub skip_existing: bool,

    /// Do not contact the image host; store the placeholder URL
    #[arg(long)]
    pub no_upload: bool,
}
