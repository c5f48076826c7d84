use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::MemberStatus;

/// A registered (or pre-registered) member of a union.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "union_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub union_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub property_address: Option<String>,
    pub status: MemberStatus,
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
    #[sea_orm(has_many = "super::user_property_unit::Entity")]
    UserPropertyUnit,
    #[sea_orm(has_many = "super::user_consent::Entity")]
    UserConsent,
}

impl Related<super::union_tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnionTenant.def()
    }
}

impl Related<super::user_property_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPropertyUnit.def()
    }
}

impl Related<super::user_consent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserConsent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
