use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnionDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub phone: Option<String>,
    pub business_hours: Option<String>,
    pub kakao_channel_id: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::union_tenant::Model> for UnionDto {
    fn from(union: entity::union_tenant::Model) -> Self {
        Self {
            id: union.id,
            name: union.name,
            slug: union.slug,
            phone: union.phone,
            business_hours: union.business_hours,
            kakao_channel_id: union.kakao_channel_id,
            is_active: union.is_active,
            created_at: union.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnionDto {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_hours: Option<String>,
    #[serde(default)]
    pub kakao_channel_id: Option<String>,
}

/// Partial update, absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnionDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_hours: Option<String>,
    #[serde(default)]
    pub kakao_channel_id: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
