//! The reconciliation routine shared by every bulk upload path.

use std::future::Future;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::consent::{BulkUploadResultDto, BulkUploadRowDto, RowErrorDto},
    server::{
        data::{
            consent::user_consent::UserConsentRepository, member::MemberRepository,
            sync_job::SyncJobRepository,
        },
        error::Error,
        service::consent::{
            matcher::MemberDirectory,
            status::{parse_status_token, ParsedStatus},
        },
        util::time::progress_percent,
    },
};

/// Receives progress after each processed row.
pub trait ProgressReporter: Send {
    /// Called with the rows handled so far out of `total`.
    fn report(&mut self, processed: usize, total: usize) -> impl Future<Output = ()> + Send;
}

/// Reporter for synchronous uploads where nobody polls for progress.
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _processed: usize, _total: usize) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Writes the integer percentage to `sync_job.progress` whenever it changes.
pub struct SyncJobProgress<'a> {
    db: &'a DatabaseConnection,
    job_id: i32,
    last_percent: i32,
}

impl<'a> SyncJobProgress<'a> {
    /// Reporter writing to the job `job_id`, starting from 0%
    pub fn new(db: &'a DatabaseConnection, job_id: i32) -> Self {
        Self {
            db,
            job_id,
            last_percent: 0,
        }
    }
}

impl ProgressReporter for SyncJobProgress<'_> {
    async fn report(&mut self, processed: usize, total: usize) {
        let percent = progress_percent(processed, total);
        if percent == self.last_percent {
            return;
        }

        // A lost progress write only delays what pollers see
        if let Err(err) = SyncJobRepository::new(self.db)
            .update_progress(self.job_id, percent)
            .await
        {
            tracing::warn!(
                "Failed to update progress of sync job {} to {}%: {}",
                self.job_id,
                percent,
                err
            );
            return;
        }

        self.last_percent = percent;
    }
}

/// Applies uploaded consent rows to the members of a union.
///
/// Loads the member directory once, then matches and upserts every row in order. Rows that
/// cannot be matched or stored are collected as errors numbered from 1; they never abort the
/// batch and applied rows are not rolled back.
///
/// # Arguments
/// - `db` - Database connection
/// - `union_id` - Union whose members are matched
/// - `stage_id` - Consent stage the rows are recorded at
/// - `rows` - Uploaded rows
/// - `progress` - Receives `(processed, total)` after each row
///
/// # Returns
/// - `Ok(BulkUploadResultDto)` - Counts and row errors
/// - `Err(Error::DbErr)` - The member directory could not be loaded
pub async fn reconcile<P: ProgressReporter>(
    db: &DatabaseConnection,
    union_id: i32,
    stage_id: i32,
    rows: &[BulkUploadRowDto],
    progress: &mut P,
) -> Result<BulkUploadResultDto, Error> {
    let directory = MemberDirectory::new(
        MemberRepository::new(db)
            .get_matchable_with_units(union_id)
            .await?,
    );
    let consent_repo = UserConsentRepository::new(db);
    let today = Utc::now().date_naive();
    let total = rows.len();

    tracing::debug!(
        "Reconciling {} rows for union {} stage {} against {} members",
        total,
        union_id,
        stage_id,
        directory.len()
    );

    let mut result = BulkUploadResultDto {
        success_count: 0,
        fail_count: 0,
        errors: Vec::new(),
    };

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        match apply_row(&directory, &consent_repo, stage_id, row, row_number, today).await {
            Ok(()) => result.success_count += 1,
            Err(message) => {
                result.fail_count += 1;
                result.errors.push(RowErrorDto {
                    row: row_number,
                    message,
                });
            }
        }

        progress.report(row_number, total).await;
    }

    Ok(result)
}

/// Matches and stores a single row, returning the row error message on failure
async fn apply_row(
    directory: &MemberDirectory,
    consent_repo: &UserConsentRepository<'_, DatabaseConnection>,
    stage_id: i32,
    row: &BulkUploadRowDto,
    row_number: usize,
    today: chrono::NaiveDate,
) -> Result<(), String> {
    let name = row.name.trim();
    if name.is_empty() {
        return Err("이름이 비어 있습니다.".to_string());
    }

    let member = directory
        .find_match(row)
        .ok_or_else(|| format!("일치하는 조합원을 찾을 수 없습니다: {}", name))?;

    let parsed = parse_status_token(&row.status);
    if parsed == ParsedStatus::Defaulted {
        tracing::warn!(
            "Row {}: unrecognised consent status {:?}, recording as DISAGREED",
            row_number,
            row.status
        );
    }

    consent_repo
        .upsert(member.id, stage_id, parsed.consent_status(), today)
        .await
        .map_err(|err| {
            tracing::warn!(
                "Row {}: failed to store consent of member {}: {}",
                row_number,
                member.id,
                err
            );
            format!("동의 정보를 저장하지 못했습니다: {}", name)
        })?;

    Ok(())
}
