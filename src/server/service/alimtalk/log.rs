use sea_orm::DatabaseConnection;

use crate::{
    model::alimtalk::{AlimtalkLogDto, AlimtalkLogListDto, AlimtalkLogStatsDto},
    server::{
        data::{alimtalk::log::AlimtalkLogRepository, union::UnionRepository},
        error::{not_found::NotFoundError, Error},
        model::db::AlimtalkLogModel,
    },
};

/// Aggregates send logs into totals.
///
/// `success_rate` is the share of recipients reached through kakao or an SMS/LMS fallback,
/// in percent, and 0 when no recipients were logged.
pub fn summarize_logs(logs: &[AlimtalkLogModel]) -> AlimtalkLogStatsDto {
    let mut stats = logs
        .iter()
        .fold(AlimtalkLogStatsDto::default(), |mut stats, log| {
            stats.log_count += 1;
            stats.total_count += i64::from(log.recipient_count);
            stats.kakao_success_count += i64::from(log.kakao_success_count);
            stats.sms_success_count += i64::from(log.sms_success_count);
            stats.fail_count += i64::from(log.fail_count);
            stats.total_cost += log.estimated_cost;
            stats
        });

    if stats.total_count > 0 {
        stats.success_rate = (stats.kakao_success_count + stats.sms_success_count) as f64
            / stats.total_count as f64
            * 100.0;
    }

    stats
}

/// Service listing send logs with their statistics.
pub struct AlimtalkLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlimtalkLogService<'a> {
    /// Creates a new instance of [`AlimtalkLogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Send logs newest first with their aggregate statistics
    ///
    /// # Arguments
    /// - `union_id` - Restrict to one union, or `None` for every log
    ///
    /// # Returns
    /// - `Ok(AlimtalkLogListDto)` - Logs and statistics
    /// - `Err(Error::NotFoundError)` - The given union does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self, union_id: Option<i32>) -> Result<AlimtalkLogListDto, Error> {
        if let Some(union_id) = union_id {
            if UnionRepository::new(self.db).get(union_id).await?.is_none() {
                return Err(NotFoundError::Union(union_id).into());
            }
        }

        let logs = AlimtalkLogRepository::new(self.db).list(union_id).await?;
        let stats = summarize_logs(&logs);

        Ok(AlimtalkLogListDto {
            logs: logs.into_iter().map(AlimtalkLogDto::from).collect(),
            stats,
        })
    }
}
