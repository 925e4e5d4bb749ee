//! Database DSN parsing.
//!
//! Deployments configure the database either with a PDO-style DSN
//! (`pgsql:host=db;port=5432;dbname=registre`) plus separate credentials,
//! or with a plain connection URL. Both are normalised here into the URL
//! form SeaORM connects with; the driver prefix decides the backend.

use std::fmt;

use url::Url;

use super::constants::{DEFAULT_DB_HOST, DEFAULT_MYSQL_PORT, DEFAULT_POSTGRES_PORT};
use crate::errors::{AppError, AppResult};

/// Database driver named by the DSN prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Postgres,
    MySql,
    Sqlite,
}

impl Driver {
    /// Resolve a PDO driver name or URL scheme.
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pgsql" | "postgres" | "postgresql" => Ok(Driver::Postgres),
            "mysql" | "mariadb" => Ok(Driver::MySql),
            "sqlite" => Ok(Driver::Sqlite),
            other => Err(AppError::config(format!("unsupported database driver: {other}"))),
        }
    }

    /// URL scheme understood by the SQLx drivers
    pub fn scheme(&self) -> &'static str {
        match self {
            Driver::Postgres => "postgres",
            Driver::MySql => "mysql",
            Driver::Sqlite => "sqlite",
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            Driver::Postgres => Some(DEFAULT_POSTGRES_PORT),
            Driver::MySql => Some(DEFAULT_MYSQL_PORT),
            Driver::Sqlite => None,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// A parsed data source name
#[derive(Clone, PartialEq, Eq)]
pub struct Dsn {
    driver: Driver,
    url: Url,
}

impl fmt::Debug for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dsn")
            .field("driver", &self.driver)
            .field("url", &self.redacted())
            .finish()
    }
}

impl Dsn {
    /// Parse either a PDO-style DSN or a connection URL.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::config("DSN is empty"));
        }

        if raw.contains("://") {
            return Self::parse_url(raw);
        }

        let (driver_name, body) = raw
            .split_once(':')
            .ok_or_else(|| AppError::config("DSN must start with a driver prefix, e.g. pgsql:"))?;
        let driver = Driver::from_name(driver_name)?;

        if driver == Driver::Sqlite {
            if body.is_empty() {
                return Err(AppError::config("sqlite DSN needs a path or :memory:"));
            }
            let url = Url::parse(&format!("sqlite:{body}"))
                .map_err(|e| AppError::config(format!("invalid sqlite DSN: {e}")))?;
            return Ok(Self { driver, url });
        }

        Self::parse_pdo(driver, body)
    }

    fn parse_url(raw: &str) -> AppResult<Self> {
        let mut url = Url::parse(raw).map_err(|e| AppError::config(format!("invalid database URL: {e}")))?;
        let driver = Driver::from_name(url.scheme())?;

        if url.scheme() != driver.scheme() {
            url.set_scheme(driver.scheme())
                .map_err(|_| AppError::config(format!("cannot rewrite scheme to {}", driver.scheme())))?;
        }

        Ok(Self { driver, url })
    }

    fn parse_pdo(driver: Driver, body: &str) -> AppResult<Self> {
        let mut host = DEFAULT_DB_HOST.to_string();
        let mut port = driver.default_port();
        let mut database = None;
        let mut user = None;
        let mut password = None;
        let mut params = Vec::new();

        for pair in body.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| AppError::config(format!("malformed DSN segment: {pair}")))?;
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "host" => host = value.to_string(),
                "port" => {
                    let parsed = value
                        .parse()
                        .map_err(|_| AppError::config(format!("invalid port in DSN: {value}")))?;
                    port = Some(parsed);
                }
                "dbname" => database = Some(value.to_string()),
                "user" => user = Some(value.to_string()),
                "password" => password = Some(value.to_string()),
                other => params.push((other.to_string(), value.to_string())),
            }
        }

        let database = database
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::config("DSN is missing dbname"))?;

        let authority = match port {
            Some(port) => format!("{host}:{port}"),
            None => host,
        };
        let mut url = Url::parse(&format!("{}://{authority}/", driver.scheme()))
            .map_err(|e| AppError::config(format!("invalid host in DSN: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("DSN cannot carry a database name"))?
            .pop_if_empty()
            .push(&database);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        let mut dsn = Self { driver, url };
        dsn.apply_credentials(user.as_deref(), password.as_deref())?;
        Ok(dsn)
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// Server host; `None` for SQLite
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Explicit port, else the driver default
    pub fn port(&self) -> Option<u16> {
        self.url.port().or_else(|| self.driver.default_port())
    }

    /// Extra driver options (`sslmode`, `charset`, ...)
    pub fn params(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Database name, or the file path for SQLite
    pub fn database(&self) -> &str {
        match self.driver {
            Driver::Sqlite => self.url.path(),
            _ => self.url.path().trim_start_matches('/'),
        }
    }

    /// Overwrite the credentials carried by the URL.
    ///
    /// `None` leaves the existing value untouched. SQLite has no
    /// credentials and ignores both.
    pub fn apply_credentials(&mut self, user: Option<&str>, password: Option<&str>) -> AppResult<()> {
        if self.driver == Driver::Sqlite {
            return Ok(());
        }
        if let Some(user) = user {
            self.url
                .set_username(user)
                .map_err(|_| AppError::config("DSN cannot carry a user name"))?;
        }
        if let Some(password) = password {
            let password = (!password.is_empty()).then_some(password);
            self.url
                .set_password(password)
                .map_err(|_| AppError::config("DSN cannot carry a password"))?;
        }
        Ok(())
    }

    /// Connection URL including credentials
    pub fn connection_url(&self) -> String {
        self.url.to_string()
    }

    /// Connection URL safe for logs
    pub fn redacted(&self) -> String {
        let mut url = self.url.clone();
        if url.password().is_some() {
            let _ = url.set_password(Some("[REDACTED]"));
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdo_postgres_dsn() {
        let dsn = Dsn::parse("pgsql:host=dpg-abc.render.com;port=5433;dbname=registre").unwrap();
        assert_eq!(dsn.driver(), Driver::Postgres);
        assert_eq!(dsn.database(), "registre");
        assert_eq!(dsn.connection_url(), "postgres://dpg-abc.render.com:5433/registre");
    }

    #[test]
    fn test_pdo_defaults_host_and_port() {
        let dsn = Dsn::parse("mysql:dbname=registre").unwrap();
        assert_eq!(dsn.driver(), Driver::MySql);
        assert_eq!(dsn.connection_url(), "mysql://localhost:3306/registre");
    }

    #[test]
    fn test_pdo_extra_params_become_query() {
        let dsn = Dsn::parse("pgsql:host=db;dbname=registre;sslmode=require").unwrap();
        assert_eq!(dsn.connection_url(), "postgres://db:5432/registre?sslmode=require");
        assert_eq!(dsn.params(), vec![("sslmode".to_string(), "require".to_string())]);
    }

    #[test]
    fn test_components() {
        let dsn = Dsn::parse("pgsql:host=dpg-abc.render.com;port=5433;dbname=registre").unwrap();
        assert_eq!(dsn.host(), Some("dpg-abc.render.com"));
        assert_eq!(dsn.port(), Some(5433));
        assert_eq!(dsn.database(), "registre");
        assert!(dsn.params().is_empty());

        let dsn = Dsn::parse("postgres://db/registre").unwrap();
        assert_eq!(dsn.port(), Some(5432));

        let dsn = Dsn::parse("sqlite::memory:").unwrap();
        assert_eq!(dsn.host(), None);
        assert_eq!(dsn.port(), None);
    }

    #[test]
    fn test_credentials_are_percent_encoded() {
        let mut dsn = Dsn::parse("pgsql:host=db;dbname=registre").unwrap();
        dsn.apply_credentials(Some("admin"), Some("p@ss:word")).unwrap();
        assert_eq!(dsn.connection_url(), "postgres://admin:p%40ss%3Aword@db:5432/registre");
    }

    #[test]
    fn test_empty_password_is_omitted() {
        let mut dsn = Dsn::parse("mysql:host=db;dbname=registre").unwrap();
        dsn.apply_credentials(Some("root"), Some("")).unwrap();
        assert_eq!(dsn.connection_url(), "mysql://root@db:3306/registre");
    }

    #[test]
    fn test_inline_pdo_credentials_are_overridden() {
        let mut dsn = Dsn::parse("pgsql:host=db;dbname=registre;user=old;password=old").unwrap();
        dsn.apply_credentials(Some("new"), None).unwrap();
        assert_eq!(dsn.connection_url(), "postgres://new:old@db:5432/registre");
    }

    #[test]
    fn test_url_form_is_kept() {
        let dsn = Dsn::parse("postgresql://u:p@db:5432/registre").unwrap();
        assert_eq!(dsn.driver(), Driver::Postgres);
        assert_eq!(dsn.connection_url(), "postgres://u:p@db:5432/registre");
    }

    #[test]
    fn test_sqlite_memory() {
        let mut dsn = Dsn::parse("sqlite::memory:").unwrap();
        dsn.apply_credentials(Some("ignored"), Some("ignored")).unwrap();
        assert_eq!(dsn.driver(), Driver::Sqlite);
        assert_eq!(dsn.connection_url(), "sqlite::memory:");
    }

    #[test]
    fn test_redacted_hides_password() {
        let dsn = Dsn::parse("postgres://u:secret@db/registre").unwrap();
        assert!(!dsn.redacted().contains("secret"));
        assert!(!format!("{:?}", dsn).contains("secret"));
    }

    #[test]
    fn test_rejects_unknown_driver() {
        let err = Dsn::parse("oci:dbname=registre").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_missing_dbname() {
        assert!(Dsn::parse("pgsql:host=db;port=5432").is_err());
        assert!(Dsn::parse("pgsql:host=db;port=abc;dbname=x").is_err());
        assert!(Dsn::parse("").is_err());
    }
}
