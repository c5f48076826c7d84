use sea_orm::entity::prelude::*;

/// A named phase of the redevelopment approval process.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consent_stage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub union_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub created_at: DateTime,
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
