//! Audit-log entries attached to a citizen.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MAX_IP_ADDRESS_LENGTH;
use crate::errors::{AppError, AppResult};

/// One row of the `journalisation` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journalisation {
    pub id: i32,
    pub date: Option<NaiveDateTime>,
    pub heure: Option<NaiveDateTime>,
    pub localisation: Option<String>,
    pub ipadress: Option<String>,
    /// Whether the logged operation succeeded
    pub status: bool,
    pub citoyen_id: i32,
}

/// Entry to append to the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalisation {
    pub citoyen_id: i32,
    pub localisation: Option<String>,
    pub ipadress: Option<String>,
    pub status: bool,
    pub recorded_at: NaiveDateTime,
}

impl NewJournalisation {
    /// Entry stamped with the current UTC time.
    pub fn now(citoyen_id: i32, status: bool) -> Self {
        Self {
            citoyen_id,
            localisation: None,
            ipadress: None,
            status,
            recorded_at: Utc::now().naive_utc(),
        }
    }

    pub fn localisation(mut self, localisation: impl Into<String>) -> Self {
        self.localisation = Some(localisation.into());
        self
    }

    pub fn ipadress(mut self, ip: impl Into<String>) -> Self {
        self.ipadress = Some(ip.into());
        self
    }

    pub fn check(&self) -> AppResult<()> {
        match &self.ipadress {
            Some(ip) if ip.len() > MAX_IP_ADDRESS_LENGTH => Err(AppError::validation(format!(
                "ipadress must be at most {} characters",
                MAX_IP_ADDRESS_LENGTH
            ))),
            _ => Ok(()),
        }
    }
}
