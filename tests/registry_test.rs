//! Migrations and repositories against an in-memory SQLite database.

use std::sync::Arc;

use chrono::NaiveDate;

use registre_civil::commands::migrate;
use registre_civil::cli::args::MigrateAction;
use registre_civil::domain::{NewCitoyen, NewJournalisation};
use registre_civil::errors::AppError;
use registre_civil::infra::{
    CitoyenRepository, CitoyenStore, Database, JournalisationRepository, JournalisationStore,
};
use registre_civil::services::{SeedOptions, Seeder, SAMPLE_CITOYENS};

async fn migrated_db() -> Database {
    let db = Database::connect_url("sqlite::memory:").await.unwrap();
    migrate::run(&db, MigrateAction::Up).await.unwrap();
    db
}

fn new_citoyen(numerocni: &str) -> NewCitoyen {
    NewCitoyen {
        nom: "Diop".to_string(),
        prenom: "Sidi".to_string(),
        numerocni: numerocni.to_string(),
        photoidentite: Some("https://via.placeholder.com/300x400?text=Photo+CNI".to_string()),
        lieunaiss: Some("Dakar".to_string()),
        datenaiss: NaiveDate::from_ymd_opt(1980, 1, 1),
    }
}

#[tokio::test]
async fn test_create_and_find_citoyen() {
    let db = migrated_db().await;
    let repo = CitoyenStore::new(db.get_connection());

    let created = repo.create(new_citoyen("1234567890100")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.datenaiss, NaiveDate::from_ymd_opt(1980, 1, 1));

    let found = repo.find_by_numerocni("1234567890100").await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
    assert!(repo.find_by_numerocni("0000000000000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_numerocni_is_conflict() {
    let db = migrated_db().await;
    let repo = CitoyenStore::new(db.get_connection());

    repo.create(new_citoyen("1234567890100")).await.unwrap();
    let err = repo.create(new_citoyen("1234567890100")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_invalid_citoyen_is_not_inserted() {
    let db = migrated_db().await;
    let repo = CitoyenStore::new(db.get_connection());

    let err = repo.create(new_citoyen("12AB")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_journal_entries_follow_citizen() {
    let db = migrated_db().await;
    let citoyens = CitoyenStore::new(db.get_connection());
    let journal = JournalisationStore::new(db.get_connection());

    let citoyen = citoyens.create(new_citoyen("1234567890100")).await.unwrap();
    journal
        .record(NewJournalisation::now(citoyen.id, true).localisation("Dakar").ipadress("196.1.95.10"))
        .await
        .unwrap();
    journal.record(NewJournalisation::now(citoyen.id, false)).await.unwrap();

    let entries = journal.list_for_citoyen(citoyen.id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].status);
    assert_eq!(entries[0].ipadress.as_deref(), Some("196.1.95.10"));
    assert!(entries[0].date.is_some());

    citoyens.delete(citoyen.id).await.unwrap();
    assert!(journal.list_for_citoyen(citoyen.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_journal_requires_existing_citizen() {
    let db = migrated_db().await;
    let journal = JournalisationStore::new(db.get_connection());

    let err = journal.record(NewJournalisation::now(42, true)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_delete_missing_citizen() {
    let db = migrated_db().await;
    let repo = CitoyenStore::new(db.get_connection());

    assert!(matches!(repo.delete(99).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_seed_then_reseed_with_skip() {
    let db = migrated_db().await;
    let images = tempfile::tempdir().unwrap();
    let repo = Arc::new(CitoyenStore::new(db.get_connection()));

    let mut options = SeedOptions {
        images_dir: images.path().to_path_buf(),
        upload_folder: "cni/recto".to_string(),
        skip_existing: false,
    };

    let first = Seeder::new(repo.clone(), None, options.clone()).run(SAMPLE_CITOYENS).await.unwrap();
    assert_eq!(first.inserted.len(), 3);

    // the unique key rejects every sample on a plain rerun
    let plain = Seeder::new(repo.clone(), None, options.clone()).run(SAMPLE_CITOYENS).await.unwrap();
    assert_eq!(plain.failed.len(), 3);

    options.skip_existing = true;
    let skipped = Seeder::new(repo.clone(), None, options).run(SAMPLE_CITOYENS).await.unwrap();
    assert_eq!(skipped.skipped.len(), 3);

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].full_name(), "fatou Ndiaye");
    assert_eq!(all[1].lieunaiss.as_deref(), Some("Saint-Louis"));
}

#[tokio::test]
async fn test_fresh_clears_data() {
    let db = migrated_db().await;
    let repo = CitoyenStore::new(db.get_connection());
    repo.create(new_citoyen("1234567890100")).await.unwrap();

    migrate::run(&db, MigrateAction::Fresh).await.unwrap();

    assert!(repo.list().await.unwrap().is_empty());
}
