use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::TemplateStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alimtalk_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub template_code: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: TemplateStatus,
    /// Whether the provider may fall back to SMS/LMS when kakao delivery fails
    pub lms_failover: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
