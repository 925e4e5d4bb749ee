//! Application services layer - Use cases.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! the repository and image host traits, so tests can swap in mocks.

pub mod samples;
mod seeder;

pub use samples::{SampleCitoyen, SAMPLE_CITOYENS};
pub use seeder::{SeedOptions, SeedReport, Seeder};
