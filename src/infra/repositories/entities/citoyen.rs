//! Citizen database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Citoyen;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "citoyen")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    #[sea_orm(unique)]
    pub numerocni: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub photoidentite: Option<String>,
    pub lieunaiss: Option<String>,
    pub datenaiss: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journalisation::Entity")]
    Journalisation,
}

impl Related<super::journalisation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journalisation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Citoyen {
    fn from(model: Model) -> Self {
        Citoyen {
            id: model.id,
            nom: model.nom,
            prenom: model.prenom,
            numerocni: model.numerocni,
            photoidentite: model.photoidentite,
            lieunaiss: model.lieunaiss,
            datenaiss: model.datenaiss,
        }
    }
}
