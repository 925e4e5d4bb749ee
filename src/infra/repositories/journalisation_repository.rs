//! Audit-log repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use super::entities::citoyen::Entity as CitoyenEntity;
use super::entities::journalisation::{self, ActiveModel, Entity as JournalisationEntity};
use crate::domain::{Journalisation, NewJournalisation};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JournalisationRepository: Send + Sync {
    /// Append an entry for an existing citizen
    async fn record(&self, entry: NewJournalisation) -> AppResult<Journalisation>;

    /// Entries of one citizen, oldest first
    async fn list_for_citoyen(&self, citoyen_id: i32) -> AppResult<Vec<Journalisation>>;
}

pub struct JournalisationStore {
    db: DatabaseConnection,
}

impl JournalisationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JournalisationRepository for JournalisationStore {
    async fn record(&self, entry: NewJournalisation) -> AppResult<Journalisation> {
        entry.check()?;

        CitoyenEntity::find_by_id(entry.citoyen_id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let active = ActiveModel {
            id: NotSet,
            date: Set(Some(entry.recorded_at)),
            heure: Set(Some(entry.recorded_at)),
            localisation: Set(entry.localisation),
            ipadress: Set(entry.ipadress),
            status: Set(Some(entry.status)),
            citoyen_id: Set(entry.citoyen_id),
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Journalisation::from(model))
    }

    async fn list_for_citoyen(&self, citoyen_id: i32) -> AppResult<Vec<Journalisation>> {
        let models = JournalisationEntity::find()
            .filter(journalisation::Column::CitoyenId.eq(citoyen_id))
            .order_by_asc(journalisation::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Journalisation::from).collect())
    }
}
