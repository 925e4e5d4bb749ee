//! Seed command - Loads the sample citizens.

use std::sync::Arc;

use crate::cli::args::SeedArgs;
use crate::config::{CloudinaryConfig, Config, SeedConfig};
use crate::errors::{AppError, AppResult};
use crate::infra::{CitoyenStore, CloudinaryClient, Database, ImageHost};
use crate::services::{SeedOptions, SeedReport, Seeder, SAMPLE_CITOYENS};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let options = options_from(&args, SeedConfig::from_env());

    // Credentials are checked before touching the database
    let image_host: Option<Arc<dyn ImageHost>> = if args.no_upload {
        tracing::info!("Uploads disabled, placeholder photos will be stored");
        None
    } else {
        let cloudinary = CloudinaryConfig::from_env()?;
        tracing::debug!(cloud = %cloudinary.cloud_name, "Image host configured");
        Some(Arc::new(CloudinaryClient::new(cloudinary)?))
    };

    let db = Database::connect(&config).await?;
    let seeder = Seeder::new(Arc::new(CitoyenStore::new(db.get_connection())), image_host, options);

    let report = seeder.run(SAMPLE_CITOYENS).await?;
    print_report(&report);

    if report.is_failure() {
        return Err(AppError::internal("no sample citizen could be inserted"));
    }
    Ok(())
}

/// Merge CLI flags over environment settings.
pub fn options_from(args: &SeedArgs, config: SeedConfig) -> SeedOptions {
    let mut options = SeedOptions::from(config);
    if let Some(dir) = &args.images_dir {
        options.images_dir = dir.clone();
    }
    if let Some(folder) = &args.folder {
        options.upload_folder = folder.clone();
    }
    options.skip_existing = args.skip_existing;
    options
}

fn print_report(report: &SeedReport) {
    println!("\n=== Seed Report ===");
    for citoyen in &report.inserted {
        println!("added:   {}", citoyen.full_name());
    }
    for name in &report.skipped {
        println!("skipped: {}", name);
    }
    for (name, error) in &report.failed {
        println!("failed:  {} ({})", name, error);
    }
    println!("===================\n");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let args = SeedArgs {
            images_dir: Some(PathBuf::from("/data/photos")),
            folder: None,
            skip_existing: true,
            no_upload: false,
        };
        let options = options_from(&args, SeedConfig::default());
        assert_eq!(options.images_dir, PathBuf::from("/data/photos"));
        assert_eq!(options.upload_folder, "cni/recto");
        assert!(options.skip_existing);
    }
}
