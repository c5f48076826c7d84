use sea_orm::entity::prelude::*;

/// A tenant union (redevelopment or reconstruction association).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "union_tenant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub phone: Option<String>,
    pub business_hours: Option<String>,
    pub kakao_channel_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::union_user::Entity")]
    UnionUser,
    #[sea_orm(has_many = "super::consent_stage::Entity")]
    ConsentStage,
    #[sea_orm(has_many = "super::owner::Entity")]
    Owner,
}

impl Related<super::union_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnionUser.def()
    }
}

impl Related<super::consent_stage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsentStage.def()
    }
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
