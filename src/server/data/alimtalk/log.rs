use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Outcome of one dispatch batch to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlimtalkLog {
    /// Union the dispatch belongs to, `None` for system-wide sends
    pub union_id: Option<i32>,
    /// Template sent
    pub template_code: String,
    /// Display title
    pub title: String,
    /// Number of messages attempted
    pub recipient_count: i32,
    /// Delivered through kakao
    pub kakao_success_count: i32,
    /// Delivered through SMS/LMS failover
    pub sms_success_count: i32,
    /// Not delivered
    pub fail_count: i32,
    /// Cost at the unit prices in effect
    pub estimated_cost: f64,
}

/// Repository for `alimtalk_log`
pub struct AlimtalkLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlimtalkLogRepository<'a, C> {
    /// Creates a new instance of [`AlimtalkLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a dispatch, stamped with the current time
    pub async fn create(&self, log: NewAlimtalkLog) -> Result<entity::alimtalk_log::Model, DbErr> {
        let log = entity::alimtalk_log::ActiveModel {
            union_id: ActiveValue::Set(log.union_id),
            template_code: ActiveValue::Set(log.template_code),
            title: ActiveValue::Set(log.title),
            recipient_count: ActiveValue::Set(log.recipient_count),
            kakao_success_count: ActiveValue::Set(log.kakao_success_count),
            sms_success_count: ActiveValue::Set(log.sms_success_count),
            fail_count: ActiveValue::Set(log.fail_count),
            estimated_cost: ActiveValue::Set(log.estimated_cost),
            sent_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }

    /// Logs newest first, restricted to one union when `union_id` is given
    pub async fn list(
        &self,
        union_id: Option<i32>,
    ) -> Result<Vec<entity::alimtalk_log::Model>, DbErr> {
        let mut query = entity::prelude::AlimtalkLog::find();
        if let Some(union_id) = union_id {
            query = query.filter(entity::alimtalk_log::Column::UnionId.eq(union_id));
        }

        query
            .order_by_desc(entity::alimtalk_log::Column::SentAt)
            .order_by_desc(entity::alimtalk_log::Column::Id)
            .all(self.db)
            .await
    }
}
