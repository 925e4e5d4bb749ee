//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod citoyen_repository;
mod journalisation_repository;

pub use citoyen_repository::{CitoyenRepository, CitoyenStore};
pub use journalisation_repository::{JournalisationRepository, JournalisationStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use citoyen_repository::MockCitoyenRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use journalisation_repository::MockJournalisationRepository;
