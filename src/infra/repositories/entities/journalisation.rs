//! Audit-log database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Journalisation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journalisation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Option<DateTime>,
    pub heure: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub localisation: Option<String>,
    pub ipadress: Option<String>,
    pub status: Option<bool>,
    #[sea_orm(column_name = "citoyenid")]
    pub citoyen_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::citoyen::Entity",
        from = "Column::CitoyenId",
        to = "super::citoyen::Column::Id",
        on_delete = "Cascade"
    )]
    Citoyen,
}

impl Related<super::citoyen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citoyen.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Journalisation {
    fn from(model: Model) -> Self {
        Journalisation {
            id: model.id,
            date: model.date,
            heure: model.heure,
            localisation: model.localisation,
            ipadress: model.ipadress,
            status: model.status.unwrap_or(false),
            citoyen_id: model.citoyen_id,
        }
    }
}
