//! Application configuration module
//!
//! Handles environment variables, DSN parsing and application-wide constants.

mod constants;
pub mod dsn;
mod settings;

pub use constants::*;
pub use dsn::{Driver, Dsn};
pub use settings::{CloudinaryConfig, Config, SeedConfig};
