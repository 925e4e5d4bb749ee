//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the registry tables
//! - The image host used for identity photos

pub mod db;
pub mod image_host;
pub mod repositories;

pub use db::{Database, Migrator};
pub use image_host::{CloudinaryClient, ImageHost, UploadedImage};
pub use repositories::{CitoyenRepository, CitoyenStore, JournalisationRepository, JournalisationStore};

#[cfg(any(test, feature = "test-utils"))]
pub use image_host::MockImageHost;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCitoyenRepository, MockJournalisationRepository};
