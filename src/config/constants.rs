//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Environment variables
// =============================================================================

/// Database DSN (PDO-style `pgsql:host=..;dbname=..` or a URL)
pub const ENV_DSN: &str = "DSN";

/// Database URL, accepted in place of `DSN`
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Database user
pub const ENV_DB_USER: &str = "DB_USER";

/// Database password
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Variables that must be present when `DSN` is used
pub const REQUIRED_DB_VARS: &[&str] = &[ENV_DSN, ENV_DB_USER, ENV_DB_PASSWORD];

pub const ENV_CLOUDINARY_URL: &str = "CLOUDINARY_URL";
pub const ENV_CLOUDINARY_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
pub const ENV_CLOUDINARY_API_KEY: &str = "CLOUDINARY_API_KEY";
pub const ENV_CLOUDINARY_API_SECRET: &str = "CLOUDINARY_API_SECRET";
pub const ENV_CLOUDINARY_UPLOAD_URL: &str = "CLOUDINARY_UPLOAD_URL";

pub const ENV_SEED_IMAGES_DIR: &str = "SEED_IMAGES_DIR";
pub const ENV_SEED_UPLOAD_FOLDER: &str = "SEED_UPLOAD_FOLDER";

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL port
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default MySQL port
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default host when a PDO DSN omits `host=`
pub const DEFAULT_DB_HOST: &str = "localhost";

// =============================================================================
// Image host
// =============================================================================

/// Cloudinary API base URL
pub const DEFAULT_CLOUDINARY_UPLOAD_URL: &str = "https://api.cloudinary.com";

/// Request timeout for uploads
pub const UPLOAD_TIMEOUT_SECONDS: u64 = 60;

// =============================================================================
// Seeder
// =============================================================================

/// Directory holding the sample identity photos
pub const DEFAULT_SEED_IMAGES_DIR: &str = "seeders/images";

/// Remote folder for identity card photos (front side)
pub const DEFAULT_SEED_UPLOAD_FOLDER: &str = "cni/recto";

/// Photo URL stored when the sample image is not on disk
pub const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/300x400?text=Photo+CNI";

// =============================================================================
// Validation
// =============================================================================

/// Maximum length of a stored IP address
pub const MAX_IP_ADDRESS_LENGTH: usize = 50;
