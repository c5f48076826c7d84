use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "building_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub land_lot_id: i32,
    pub dong: Option<String>,
    pub ho: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::land_lot::Entity",
        from = "Column::LandLotId",
        to = "super::land_lot::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    LandLot,
    #[sea_orm(has_many = "super::owner::Entity")]
    Owner,
}

impl Related<super::land_lot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LandLot.def()
    }
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
