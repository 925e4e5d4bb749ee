//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use url::Url;

use super::constants::{
    DEFAULT_CLOUDINARY_UPLOAD_URL, DEFAULT_SEED_IMAGES_DIR, DEFAULT_SEED_UPLOAD_FOLDER, ENV_CLOUDINARY_API_KEY,
    ENV_CLOUDINARY_API_SECRET, ENV_CLOUDINARY_CLOUD_NAME, ENV_CLOUDINARY_UPLOAD_URL, ENV_CLOUDINARY_URL,
    ENV_DATABASE_URL, ENV_DB_PASSWORD, ENV_DB_USER, ENV_DSN, ENV_SEED_IMAGES_DIR, ENV_SEED_UPLOAD_FOLDER,
    REQUIRED_DB_VARS,
};
use super::dsn::Dsn;
use crate::errors::{AppError, AppResult};

/// Database configuration
#[derive(Clone)]
pub struct Config {
    pub dsn: Dsn,
    db_user: Option<String>,
    db_password: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("dsn", &self.dsn)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// `DSN` requires `DB_USER` and `DB_PASSWORD` next to it. A
    /// `DATABASE_URL` may carry its own credentials, so both are optional
    /// there.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_user = lookup(ENV_DB_USER);
        let db_password = lookup(ENV_DB_PASSWORD);

        let dsn = match (lookup(ENV_DSN), lookup(ENV_DATABASE_URL)) {
            (Some(raw), _) => {
                for var in REQUIRED_DB_VARS {
                    if lookup(var).is_none() {
                        return Err(AppError::missing_env(*var));
                    }
                }
                Dsn::parse(&raw)?
            }
            (None, Some(raw)) => {
                // an empty override would strip the password carried by the URL
                let dsn = Dsn::parse(&raw)?;
                return Ok(Self {
                    dsn,
                    db_user: db_user.filter(|u| !u.is_empty()),
                    db_password: db_password.filter(|p| !p.is_empty()),
                });
            }
            (None, None) => return Err(AppError::missing_env(ENV_DSN)),
        };

        Ok(Self {
            dsn,
            db_user,
            db_password,
        })
    }

    /// Connection URL with the configured credentials applied.
    pub fn database_url(&self) -> AppResult<String> {
        let mut dsn = self.dsn.clone();
        dsn.apply_credentials(self.db_user.as_deref(), self.db_password.as_deref())?;
        Ok(dsn.connection_url())
    }
}

/// Cloudinary credentials
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    api_secret: String,
    pub upload_url: Url,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("upload_url", &self.upload_url.as_str())
            .finish()
    }
}

impl CloudinaryConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        upload_url: Url,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            upload_url,
        }
    }

    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read credentials from `CLOUDINARY_URL` or the three split variables.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upload_url = lookup(ENV_CLOUDINARY_UPLOAD_URL).unwrap_or_else(|| DEFAULT_CLOUDINARY_UPLOAD_URL.to_string());
        let upload_url = Url::parse(&upload_url)
            .map_err(|e| AppError::config(format!("invalid {ENV_CLOUDINARY_UPLOAD_URL}: {e}")))?;

        if let Some(raw) = lookup(ENV_CLOUDINARY_URL) {
            let parsed = Url::parse(&raw).map_err(|e| AppError::config(format!("invalid {ENV_CLOUDINARY_URL}: {e}")))?;
            if parsed.scheme() != "cloudinary" {
                return Err(AppError::config(format!("{ENV_CLOUDINARY_URL} must use the cloudinary:// scheme")));
            }
            let cloud_name = parsed.host_str().unwrap_or_default();
            let api_key = parsed.username();
            let api_secret = parsed.password().unwrap_or_default();
            if cloud_name.is_empty() || api_key.is_empty() || api_secret.is_empty() {
                return Err(AppError::config(format!(
                    "{ENV_CLOUDINARY_URL} must look like cloudinary://<key>:<secret>@<cloud>"
                )));
            }
            return Ok(Self::new(cloud_name, api_key, api_secret, upload_url));
        }

        let require = |key: &str| lookup(key).ok_or_else(|| AppError::missing_env(key));
        Ok(Self::new(
            require(ENV_CLOUDINARY_CLOUD_NAME)?,
            require(ENV_CLOUDINARY_API_KEY)?,
            require(ENV_CLOUDINARY_API_SECRET)?,
            upload_url,
        ))
    }

    /// Secret used to sign upload requests.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

/// Seeder settings
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub images_dir: PathBuf,
    pub upload_folder: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_SEED_IMAGES_DIR),
            upload_folder: DEFAULT_SEED_UPLOAD_FOLDER.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            images_dir: lookup(ENV_SEED_IMAGES_DIR).map(PathBuf::from).unwrap_or(defaults.images_dir),
            upload_folder: lookup(ENV_SEED_UPLOAD_FOLDER).unwrap_or(defaults.upload_folder),
        }
    }
}
