use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_property_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub jibun_address: Option<String>,
    pub dong: Option<String>,
    pub ho: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::union_user::Entity",
        from = "Column::UserId",
        to = "super::union_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UnionUser,
}

impl Related<super::union_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnionUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
