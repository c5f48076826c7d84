//! Bulk consent upload dispatch.
//!
//! Small batches are reconciled in-process and answered with their result. Large batches are
//! tracked by a `sync_job` and handed off to the external worker behind the proxy; when the
//! hand-off fails the same reconciliation runs in-process against the job.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::consent::{
        BulkUploadQueuedDto, BulkUploadRequestDto, BulkUploadResponseDto, BulkUploadResultDto,
        BulkUploadRowDto,
    },
    server::{
        data::{
            consent::stage::ConsentStageRepository,
            sync_job::{SyncJobRepository, CONSENT_BULK_UPLOAD_JOB},
            union::UnionRepository,
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        proxy::{BulkUploadHandoff, ProxyClient},
        service::consent::reconcile::{reconcile, NoProgress, SyncJobProgress},
    },
};

/// Batches with at least this many rows are tracked by a sync job.
pub const ASYNC_THRESHOLD: usize = 50;

/// How a batch is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkUploadStrategy {
    /// Reconcile within the request and answer with the result
    InProcess,
    /// Track with a sync job and hand off to the external worker
    Delegate,
}

impl BulkUploadStrategy {
    /// Strategy for a batch of `row_count` rows, see [`ASYNC_THRESHOLD`]
    pub fn for_rows(row_count: usize) -> Self {
        if row_count < ASYNC_THRESHOLD {
            Self::InProcess
        } else {
            Self::Delegate
        }
    }
}

/// Service applying uploaded consent rows to the members of a union.
pub struct BulkUploadService<'a> {
    db: &'a DatabaseConnection,
    proxy: &'a ProxyClient,
}

impl<'a> BulkUploadService<'a> {
    /// Creates a new instance of [`BulkUploadService`]
    pub fn new(db: &'a DatabaseConnection, proxy: &'a ProxyClient) -> Self {
        Self { db, proxy }
    }

    /// Validates and processes an uploaded batch.
    ///
    /// # Arguments
    /// - `request` - Union, stage and uploaded rows
    ///
    /// # Returns
    /// - `Ok(BulkUploadResponseDto::Completed)` - Batch below [`ASYNC_THRESHOLD`] rows, with
    ///   its counts and row errors
    /// - `Ok(BulkUploadResponseDto::Queued)` - Larger batch, with the id of its tracking job
    /// - `Err(Error::ValidationError)` - Union id, stage id or rows missing
    /// - `Err(Error::NotFoundError)` - Union or stage does not exist, or the stage belongs to
    ///   another union
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn upload(
        &self,
        request: BulkUploadRequestDto,
    ) -> Result<BulkUploadResponseDto, Error> {
        let union_id = request.union_id.ok_or(ValidationError::MissingUnionId)?;
        let stage_id = request.stage_id.ok_or(ValidationError::MissingStageId)?;
        if request.data.is_empty() {
            return Err(ValidationError::EmptyUploadData.into());
        }

        if UnionRepository::new(self.db).get(union_id).await?.is_none() {
            return Err(NotFoundError::Union(union_id).into());
        }
        if ConsentStageRepository::new(self.db)
            .get_for_union(union_id, stage_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::ConsentStage(stage_id).into());
        }

        let rows = request.data;
        let strategy = BulkUploadStrategy::for_rows(rows.len());

        tracing::info!(
            "Bulk consent upload of {} rows for union {} stage {} ({:?})",
            rows.len(),
            union_id,
            stage_id,
            strategy
        );

        match strategy {
            BulkUploadStrategy::InProcess => {
                let result = reconcile(self.db, union_id, stage_id, &rows, &mut NoProgress).await?;

                Ok(BulkUploadResponseDto::Completed(result))
            }
            BulkUploadStrategy::Delegate => {
                let queued = self.delegate(union_id, stage_id, &rows).await?;

                Ok(BulkUploadResponseDto::Queued(queued))
            }
        }
    }

    /// Creates the tracking job and hands the batch off, falling back to in-process
    async fn delegate(
        &self,
        union_id: i32,
        stage_id: i32,
        rows: &[BulkUploadRowDto],
    ) -> Result<BulkUploadQueuedDto, Error> {
        let job_repo = SyncJobRepository::new(self.db);
        let job = job_repo
            .create(
                union_id,
                CONSENT_BULK_UPLOAD_JOB,
                Some(json!({ "stageId": stage_id, "totalRows": rows.len() })),
            )
            .await?;

        let handoff = BulkUploadHandoff {
            job_id: job.id,
            union_id,
            stage_id,
            data: rows,
        };

        match self.proxy.dispatch_bulk_upload(&handoff).await {
            Ok(()) => Ok(BulkUploadQueuedDto {
                job_id: job.id,
                message: "대용량 업로드가 접수되었습니다. 작업 진행률을 확인해 주세요.".to_string(),
            }),
            Err(err) => {
                tracing::warn!(
                    "Bulk upload hand-off for sync job {} failed, processing in-process: {}",
                    job.id,
                    err
                );

                Ok(self.run_fallback(job.id, union_id, stage_id, rows).await)
            }
        }
    }

    /// Reconciles a delegated batch in-process and finishes its job
    ///
    /// Failures to write the final job state are logged; the rows already applied stand.
    async fn run_fallback(
        &self,
        job_id: i32,
        union_id: i32,
        stage_id: i32,
        rows: &[BulkUploadRowDto],
    ) -> BulkUploadQueuedDto {
        let job_repo = SyncJobRepository::new(self.db);
        let mut progress = SyncJobProgress::new(self.db, job_id);

        match reconcile(self.db, union_id, stage_id, rows, &mut progress).await {
            Ok(result) => {
                if let Err(err) = job_repo
                    .complete(job_id, completed_preview(stage_id, rows.len(), &result))
                    .await
                {
                    tracing::error!("Failed to mark sync job {} completed: {}", job_id, err);
                }

                tracing::info!(
                    "Sync job {} completed in-process: {} succeeded, {} failed",
                    job_id,
                    result.success_count,
                    result.fail_count
                );

                BulkUploadQueuedDto {
                    job_id,
                    message: format!(
                        "업로드가 처리되었습니다. (성공 {}건, 실패 {}건)",
                        result.success_count, result.fail_count
                    ),
                }
            }
            Err(err) => {
                tracing::error!("Sync job {} failed in-process: {}", job_id, err);

                if let Err(err) = job_repo
                    .fail(
                        job_id,
                        json!({
                            "stageId": stage_id,
                            "totalRows": rows.len(),
                            "error": err.to_string(),
                        }),
                    )
                    .await
                {
                    tracing::error!("Failed to mark sync job {} failed: {}", job_id, err);
                }

                BulkUploadQueuedDto {
                    job_id,
                    message: "업로드 처리에 실패했습니다. 작업 상태를 확인해 주세요.".to_string(),
                }
            }
        }
    }
}

fn completed_preview(
    stage_id: i32,
    total_rows: usize,
    result: &BulkUploadResultDto,
) -> serde_json::Value {
    json!({
        "stageId": stage_id,
        "totalRows": total_rows,
        "successCount": result.success_count,
        "failCount": result.fail_count,
        "errors": result.errors,
    })
}
