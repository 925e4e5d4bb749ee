//! Seeder service - Loads sample citizens with their identity photos.
//!
//! Each sample is handled on its own: a failed upload or insert is logged
//! with the citizen's name and the remaining samples still run.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{SeedConfig, PLACEHOLDER_PHOTO_URL};
use crate::domain::Citoyen;
use crate::errors::AppResult;
use crate::infra::{CitoyenRepository, ImageHost};

use super::samples::SampleCitoyen;

/// Seeder settings
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub images_dir: PathBuf,
    pub upload_folder: String,
    /// Skip samples whose `numerocni` is already stored
    pub skip_existing: bool,
}

impl From<SeedConfig> for SeedOptions {
    fn from(config: SeedConfig) -> Self {
        Self {
            images_dir: config.images_dir,
            upload_folder: config.upload_folder,
            skip_existing: false,
        }
    }
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<Citoyen>,
    pub skipped: Vec<String>,
    /// Full name and error message of each failed sample
    pub failed: Vec<(String, String)>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Samples failed and none was inserted; the command exits non-zero
    pub fn is_failure(&self) -> bool {
        self.inserted.is_empty() && !self.failed.is_empty()
    }
}

enum Outcome {
    Inserted(Citoyen),
    Skipped,
}

pub struct Seeder {
    citoyens: Arc<dyn CitoyenRepository>,
    /// `None` stores the placeholder URL for every sample
    image_host: Option<Arc<dyn ImageHost>>,
    options: SeedOptions,
}

impl Seeder {
    pub fn new(
        citoyens: Arc<dyn CitoyenRepository>,
        image_host: Option<Arc<dyn ImageHost>>,
        options: SeedOptions,
    ) -> Self {
        Self {
            citoyens,
            image_host,
            options,
        }
    }

    /// Seed every sample and report what happened.
    ///
    /// Only a failure to prepare the images directory aborts the run.
    pub async fn run(&self, samples: &[SampleCitoyen]) -> AppResult<SeedReport> {
        self.ensure_images_dir().await?;

        let mut report = SeedReport::default();
        for sample in samples {
            let name = sample.full_name();
            match self.seed_one(sample).await {
                Ok(Outcome::Inserted(citoyen)) => {
                    tracing::info!(citoyen = %name, id = citoyen.id, "Citizen added");
                    report.inserted.push(citoyen);
                }
                Ok(Outcome::Skipped) => {
                    tracing::info!(citoyen = %name, numerocni = sample.numerocni, "Citizen already present, skipped");
                    report.skipped.push(name);
                }
                Err(e) => {
                    tracing::error!(citoyen = %name, error = %e, "Failed to insert citizen");
                    report.failed.push((name, e.to_string()));
                }
            }
        }

        tracing::info!(
            inserted = report.inserted.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Seeding finished"
        );
        Ok(report)
    }

    async fn ensure_images_dir(&self) -> AppResult<()> {
        let dir = &self.options.images_dir;
        if !tokio::fs::try_exists(dir).await? {
            tokio::fs::create_dir_all(dir).await?;
            tracing::info!(path = %dir.display(), "Images directory created");
        }
        Ok(())
    }

    async fn seed_one(&self, sample: &SampleCitoyen) -> AppResult<Outcome> {
        let citoyen = sample.to_new_citoyen()?;

        if self.options.skip_existing && self.citoyens.find_by_numerocni(sample.numerocni).await?.is_some() {
            return Ok(Outcome::Skipped);
        }

        let photo_url = self.resolve_photo(sample).await?;
        let created = self.citoyens.create(citoyen.with_photo(photo_url)).await?;
        Ok(Outcome::Inserted(created))
    }

    /// Upload the sample's photo, or fall back to the placeholder URL.
    async fn resolve_photo(&self, sample: &SampleCitoyen) -> AppResult<String> {
        let path = self.options.images_dir.join(sample.photo);

        if !tokio::fs::try_exists(&path).await? {
            tracing::warn!(path = %path.display(), "Image not found, using placeholder");
            return Ok(PLACEHOLDER_PHOTO_URL.to_string());
        }

        let Some(host) = &self.image_host else {
            tracing::debug!(path = %path.display(), "Uploads disabled, using placeholder");
            return Ok(PLACEHOLDER_PHOTO_URL.to_string());
        };

        let uploaded = host.upload(&path, &self.options.upload_folder).await?;
        tracing::info!(url = %uploaded.secure_url, "Image uploaded");
        Ok(uploaded.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citoyen() -> Citoyen {
        Citoyen {
            id: 1,
            nom: "Diop".to_string(),
            prenom: "Sidi".to_string(),
            numerocni: Some("1234567890100".to_string()),
            photoidentite: None,
            lieunaiss: None,
            datenaiss: None,
        }
    }

    #[test]
    fn test_report_failure_rule() {
        let failed = ("Sidi Diop".to_string(), "upload rejected".to_string());

        assert!(!SeedReport::default().is_failure());

        let all_failed = SeedReport {
            failed: vec![failed.clone()],
            ..Default::default()
        };
        assert!(all_failed.is_failure());

        let partial = SeedReport {
            inserted: vec![citoyen()],
            failed: vec![failed],
            ..Default::default()
        };
        assert!(!partial.is_failure());
        assert!(!partial.is_clean());

        let reseeded = SeedReport {
            skipped: vec!["Sidi Diop".to_string()],
            ..Default::default()
        };
        assert!(!reseeded.is_failure());
    }
}
