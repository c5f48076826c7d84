use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::SyncJobStatus;

/// Tracks a long-running bulk operation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sync_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub union_id: i32,
    pub job_type: String,
    pub status: SyncJobStatus,
    /// Percentage in `0..=100`
    pub progress: i32,
    pub preview_data: Option<Json>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::union_tenant::Entity",
        from = "Column::UnionId",
        to = "super::union_tenant::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UnionTenant,
}

impl Related<super::union_tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnionTenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
