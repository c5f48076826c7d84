use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{MessageType, TemplateStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Population a consent reminder is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderTargetDto {
    /// Owners without an agreement at the given stage
    NonAgreed,
    /// Owners that have not registered as members yet
    NonRegistered,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentReminderRequestDto {
    #[serde(default)]
    pub union_id: Option<i32>,
    #[serde(default)]
    pub target_type: Option<ReminderTargetDto>,
    #[serde(default)]
    pub stage_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentReminderResultDto {
    pub log_id: i32,
    pub template_code: String,
    pub recipient_count: i32,
    pub kakao_success_count: i32,
    pub sms_success_count: i32,
    pub fail_count: i32,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkTemplateDto {
    pub template_code: String,
    pub name: String,
    pub content: String,
    #[schema(value_type = String)]
    pub status: TemplateStatus,
    pub lms_failover: bool,
    pub updated_at: NaiveDateTime,
}

impl From<entity::alimtalk_template::Model> for AlimtalkTemplateDto {
    fn from(template: entity::alimtalk_template::Model) -> Self {
        Self {
            template_code: template.template_code,
            name: template.name,
            content: template.content,
            status: template.status,
            lms_failover: template.lms_failover,
            updated_at: template.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAlimtalkTemplateDto {
    pub template_code: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<TemplateStatus>,
    #[serde(default)]
    pub lms_failover: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingDto {
    pub id: i32,
    #[schema(value_type = String)]
    pub message_type: MessageType,
    pub unit_price: f64,
    pub effective_from: NaiveDateTime,
}

impl From<entity::alimtalk_pricing::Model> for PricingDto {
    fn from(pricing: entity::alimtalk_pricing::Model) -> Self {
        Self {
            id: pricing.id,
            message_type: pricing.message_type,
            unit_price: pricing.unit_price,
            effective_from: pricing.effective_from,
        }
    }
}

/// Price in effect for a message type; `effective_from` is `None` when no price is on file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPriceDto {
    #[schema(value_type = String)]
    pub message_type: MessageType,
    pub unit_price: f64,
    pub effective_from: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverviewDto {
    pub current: Vec<CurrentPriceDto>,
    pub history: Vec<PricingDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePricingDto {
    #[schema(value_type = String)]
    pub message_type: MessageType,
    pub unit_price: f64,
    /// Defaults to now
    #[serde(default)]
    pub effective_from: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkLogDto {
    pub id: i32,
    pub union_id: Option<i32>,
    pub template_code: String,
    pub title: String,
    pub recipient_count: i32,
    pub kakao_success_count: i32,
    pub sms_success_count: i32,
    pub fail_count: i32,
    pub estimated_cost: f64,
    pub sent_at: NaiveDateTime,
}

impl From<entity::alimtalk_log::Model> for AlimtalkLogDto {
    fn from(log: entity::alimtalk_log::Model) -> Self {
        Self {
            id: log.id,
            union_id: log.union_id,
            template_code: log.template_code,
            title: log.title,
            recipient_count: log.recipient_count,
            kakao_success_count: log.kakao_success_count,
            sms_success_count: log.sms_success_count,
            fail_count: log.fail_count,
            estimated_cost: log.estimated_cost,
            sent_at: log.sent_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkLogStatsDto {
    pub log_count: usize,
    /// Sum of recipients over all logs
    pub total_count: i64,
    pub kakao_success_count: i64,
    pub sms_success_count: i64,
    pub fail_count: i64,
    pub total_cost: f64,
    /// Percentage of recipients reached through any channel
    pub success_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkLogListDto {
    pub logs: Vec<AlimtalkLogDto>,
    pub stats: AlimtalkLogStatsDto,
}
