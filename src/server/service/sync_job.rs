use sea_orm::DatabaseConnection;

use crate::{
    model::sync_job::SyncJobDto,
    server::{
        data::sync_job::SyncJobRepository,
        error::{not_found::NotFoundError, Error},
    },
};

/// Service for polling tracked jobs.
pub struct SyncJobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncJobService<'a> {
    /// Creates a new instance of [`SyncJobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current state of a job
    ///
    /// # Returns
    /// - `Ok(SyncJobDto)` - Status, progress and preview data of the job
    /// - `Err(Error::NotFoundError)` - Job does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, job_id: i32) -> Result<SyncJobDto, Error> {
        let job = SyncJobRepository::new(self.db)
            .get(job_id)
            .await?
            .ok_or(NotFoundError::SyncJob(job_id))?;

        Ok(job.into())
    }
}
