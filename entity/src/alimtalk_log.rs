use sea_orm::entity::prelude::*;

/// One row per dispatch batch.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alimtalk_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `None` for system-wide sends
    pub union_id: Option<i32>,
    pub template_code: String,
    pub title: String,
    pub recipient_count: i32,
    pub kakao_success_count: i32,
    pub sms_success_count: i32,
    pub fail_count: i32,
    pub estimated_cost: f64,
    pub sent_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::union_tenant::Entity",
        from = "Column::UnionId",
        to = "super::union_tenant::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    UnionTenant,
}

impl Related<super::union_tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnionTenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
