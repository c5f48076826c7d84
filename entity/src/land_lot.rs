use sea_orm::entity::prelude::*;

/// A land parcel identified by its 19-digit PNU code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "land_lot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub union_id: i32,
    #[sea_orm(unique)]
    pub pnu: String,
    pub address: String,
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
    #[sea_orm(has_many = "super::building_unit::Entity")]
    BuildingUnit,
}

impl Related<super::union_tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnionTenant.def()
    }
}

impl Related<super::building_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildingUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
