use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::MessageType;

/// Effective-dated unit price; rows are never updated, a price change appends a new row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alimtalk_pricing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub message_type: MessageType,
    pub unit_price: f64,
    pub effective_from: DateTime,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
