use entity::sea_orm_active_enums::ConsentStatus;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of a bulk consent upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadRowDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub dong: Option<String>,
    #[serde(default)]
    pub ho: Option<String>,
    /// "동의"/"AGREED" for agreement, anything else is recorded as disagreement
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadRequestDto {
    #[serde(default)]
    pub union_id: Option<i32>,
    #[serde(default)]
    pub stage_id: Option<i32>,
    /// Missing and `null` are both treated as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<BulkUploadRowDto>,
}

/// A row that could not be applied, `row` is the 1-based position in the uploaded data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RowErrorDto {
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadResultDto {
    pub success_count: usize,
    pub fail_count: usize,
    pub errors: Vec<RowErrorDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadQueuedDto {
    pub job_id: i32,
    pub message: String,
}

/// Small batches are answered with their result, large batches with the tracking job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BulkUploadResponseDto {
    Completed(BulkUploadResultDto),
    Queued(BulkUploadQueuedDto),
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentStageDto {
    pub id: i32,
    pub union_id: i32,
    pub name: String,
    pub sort_order: i32,
}

impl From<entity::consent_stage::Model> for ConsentStageDto {
    fn from(stage: entity::consent_stage::Model) -> Self {
        Self {
            id: stage.id,
            union_id: stage.union_id,
            name: stage.name,
            sort_order: stage.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsentStageDto {
    pub name: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Consent counts at a stage over the members that can be matched by uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSummaryDto {
    pub stage_id: i32,
    pub agreed: u64,
    pub disagreed: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordOwnerConsentDto {
    #[schema(value_type = String)]
    pub status: ConsentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerConsentDto {
    pub owner_id: i32,
    pub stage_id: i32,
    #[schema(value_type = String)]
    pub status: ConsentStatus,
    pub consent_date: chrono::NaiveDate,
}

impl From<entity::owner_consent::Model> for OwnerConsentDto {
    fn from(consent: entity::owner_consent::Model) -> Self {
        Self {
            owner_id: consent.owner_id,
            stage_id: consent.stage_id,
            status: consent.status,
            consent_date: consent.consent_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::BulkUploadRequestDto;

    #[test]
    fn null_data_reads_as_empty() {
        let request: BulkUploadRequestDto =
            serde_json::from_value(json!({"unionId": 1, "stageId": 2, "data": null})).unwrap();

        assert!(request.data.is_empty());
    }

    #[test]
    fn null_row_fields_read_as_empty() {
        let request: BulkUploadRequestDto = serde_json::from_value(json!({
            "unionId": 1,
            "stageId": 2,
            "data": [{"name": null, "address": null, "status": null}]
        }))
        .unwrap();

        let row = &request.data[0];
        assert_eq!(row.name, "");
        assert_eq!(row.status, "");
        assert!(row.address.is_none());
    }
}
