//! Sample citizens loaded by the `seed` command.

use chrono::NaiveDate;

use crate::domain::NewCitoyen;
use crate::errors::{AppError, AppResult};

/// Hardcoded sample record; `photo` is a file name inside the images directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCitoyen {
    pub nom: &'static str,
    pub prenom: &'static str,
    pub numerocni: &'static str,
    pub photo: &'static str,
    pub lieunaiss: &'static str,
    pub datenaiss: &'static str,
}

pub const SAMPLE_CITOYENS: &[SampleCitoyen] = &[
    SampleCitoyen {
        nom: "Diop",
        prenom: "Sidi",
        numerocni: "1234567890100",
        photo: "photo_identite1.png",
        lieunaiss: "Dakar",
        datenaiss: "1980-01-01",
    },
    SampleCitoyen {
        nom: "Fall",
        prenom: "Ami",
        numerocni: "1237567890101",
        photo: "photo_identite2.png",
        lieunaiss: "Saint-Louis",
        datenaiss: "1986-05-15",
    },
    SampleCitoyen {
        nom: "Ndiaye",
        prenom: "fatou",
        numerocni: "1234567890104",
        photo: "photo_identite3.png",
        lieunaiss: "fatick",
        datenaiss: "1994-12-20",
    },
];

impl SampleCitoyen {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }

    /// Insert payload without a photo URL
    pub fn to_new_citoyen(&self) -> AppResult<NewCitoyen> {
        let datenaiss = NaiveDate::parse_from_str(self.datenaiss, "%Y-%m-%d")
            .map_err(|e| AppError::validation(format!("invalid datenaiss {}: {e}", self.datenaiss)))?;

        Ok(NewCitoyen {
            nom: self.nom.to_string(),
            prenom: self.prenom.to_string(),
            numerocni: self.numerocni.to_string(),
            photoidentite: None,
            lieunaiss: Some(self.lieunaiss.to_string()),
            datenaiss: Some(datenaiss),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_valid() {
        for sample in SAMPLE_CITOYENS {
            let citoyen = sample.to_new_citoyen().unwrap();
            assert!(citoyen.check().is_ok(), "{} should be valid", sample.full_name());
        }
    }

    #[test]
    fn test_samples_have_unique_cni() {
        let mut cnis: Vec<_> = SAMPLE_CITOYENS.iter().map(|s| s.numerocni).collect();
        cnis.sort_unstable();
        cnis.dedup();
        assert_eq!(cnis.len(), SAMPLE_CITOYENS.len());
    }

    #[test]
    fn test_bad_date() {
        let sample = SampleCitoyen {
            datenaiss: "1994-13-40",
            ..SAMPLE_CITOYENS[0]
        };
        assert!(sample.to_new_citoyen().is_err());
    }
}
