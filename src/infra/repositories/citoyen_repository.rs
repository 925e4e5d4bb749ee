//! Citizen repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::entities::citoyen::{self, ActiveModel, Entity as CitoyenEntity};
use crate::domain::{Citoyen, NewCitoyen};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Citizen repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CitoyenRepository: Send + Sync {
    /// Find citizen by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Citoyen>>;

    /// Find citizen by national identity card number
    async fn find_by_numerocni(&self, numerocni: &str) -> AppResult<Option<Citoyen>>;

    /// Validate and insert a new citizen.
    ///
    /// A duplicate `numerocni` yields `AppError::Conflict`.
    async fn create(&self, citoyen: NewCitoyen) -> AppResult<Citoyen>;

    /// List all citizens ordered by id
    async fn list(&self) -> AppResult<Vec<Citoyen>>;

    /// Delete citizen by id; its journal entries go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CitoyenRepository
pub struct CitoyenStore {
    db: DatabaseConnection,
}

impl CitoyenStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr, numerocni: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(format!("Citoyen {}", numerocni)),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl CitoyenRepository for CitoyenStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Citoyen>> {
        let result = CitoyenEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Citoyen::from))
    }

    async fn find_by_numerocni(&self, numerocni: &str) -> AppResult<Option<Citoyen>> {
        let result = CitoyenEntity::find()
            .filter(citoyen::Column::Numerocni.eq(numerocni))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Citoyen::from))
    }

    async fn create(&self, citoyen: NewCitoyen) -> AppResult<Citoyen> {
        citoyen.check()?;

        let numerocni = citoyen.numerocni.clone();
        let active = ActiveModel {
            id: NotSet,
            nom: Set(citoyen.nom),
            prenom: Set(citoyen.prenom),
            numerocni: Set(Some(citoyen.numerocni)),
            photoidentite: Set(citoyen.photoidentite),
            lieunaiss: Set(citoyen.lieunaiss),
            datenaiss: Set(citoyen.datenaiss),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &numerocni))?;
        Ok(Citoyen::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Citoyen>> {
        let models = CitoyenEntity::find()
            .order_by_asc(citoyen::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Citoyen::from).collect())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = CitoyenEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
