use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ConsentStatus;

/// Consent of an owner at a stage, unique on (`owner_id`, `stage_id`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner_consent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub stage_id: i32,
    pub status: ConsentStatus,
    pub consent_date: Date,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::consent_stage::Entity",
        from = "Column::StageId",
        to = "super::consent_stage::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ConsentStage,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::consent_stage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsentStage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
