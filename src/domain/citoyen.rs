//! Citizen domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Citizen record as stored in the `citoyen` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citoyen {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub numerocni: Option<String>,
    pub photoidentite: Option<String>,
    pub lieunaiss: Option<String>,
    pub datenaiss: Option<NaiveDate>,
}

impl Citoyen {
    /// Display name, first name first
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

/// Citizen creation payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewCitoyen {
    #[validate(length(min = 1, max = 100, message = "nom must be 1 to 100 characters"))]
    pub nom: String,
    #[validate(length(min = 1, max = 100, message = "prenom must be 1 to 100 characters"))]
    pub prenom: String,
    #[validate(length(min = 1, max = 20, message = "numerocni must be 1 to 20 characters"))]
    pub numerocni: String,
    pub photoidentite: Option<String>,
    #[validate(length(max = 100, message = "lieunaiss must be at most 100 characters"))]
    pub lieunaiss: Option<String>,
    pub datenaiss: Option<NaiveDate>,
}

impl NewCitoyen {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }

    /// Field constraints plus the digits-only rule for `numerocni`.
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        if !self.numerocni.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::validation("numerocni must contain digits only"));
        }
        Ok(())
    }

    /// Same payload with the photo URL replaced
    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photoidentite = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewCitoyen {
        NewCitoyen {
            nom: "Diop".to_string(),
            prenom: "Sidi".to_string(),
            numerocni: "1234567890100".to_string(),
            photoidentite: None,
            lieunaiss: Some("Dakar".to_string()),
            datenaiss: NaiveDate::from_ymd_opt(1980, 1, 1),
        }
    }

    #[test]
    fn test_valid_citoyen() {
        assert!(sample().check().is_ok());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Sidi Diop");
    }

    #[test]
    fn test_empty_nom_rejected() {
        let mut c = sample();
        c.nom.clear();
        let err = c.check().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("nom")));
    }

    #[test]
    fn test_numerocni_too_long() {
        let mut c = sample();
        c.numerocni = "1".repeat(21);
        assert!(c.check().is_err());
    }

    #[test]
    fn test_numerocni_digits_only() {
        let mut c = sample();
        c.numerocni = "12345A7890100".to_string();
        let err = c.check().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("digits")));
    }

    #[test]
    fn test_lieunaiss_length() {
        let mut c = sample();
        c.lieunaiss = Some("x".repeat(101));
        assert!(c.check().is_err());
    }

    #[test]
    fn test_with_photo() {
        let c = sample().with_photo("https://res.cloudinary.com/demo/a.png");
        assert_eq!(c.photoidentite.as_deref(), Some("https://res.cloudinary.com/demo/a.png"));
    }
}
