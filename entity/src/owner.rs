use sea_orm::entity::prelude::*;

/// A property owner on file with the union, whether or not they have registered as a member.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub union_id: i32,
    pub building_unit_id: Option<i32>,
    /// Set once the owner has registered as a union member
    pub user_id: Option<i32>,
    pub name: String,
    pub phone: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::building_unit::Entity",
        from = "Column::BuildingUnitId",
        to = "super::building_unit::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    BuildingUnit,
    #[sea_orm(has_many = "super::owner_consent::Entity")]
    OwnerConsent,
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

impl Related<super::owner_consent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OwnerConsent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
