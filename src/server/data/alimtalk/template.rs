use chrono::Utc;
use entity::sea_orm_active_enums::TemplateStatus;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::alimtalk::UpsertAlimtalkTemplateDto;

/// Repository for `alimtalk_template`
pub struct AlimtalkTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlimtalkTemplateRepository<'a, C> {
    /// Creates a new instance of [`AlimtalkTemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Template with the given code
    pub async fn get_by_code(
        &self,
        template_code: &str,
    ) -> Result<Option<entity::alimtalk_template::Model>, DbErr> {
        entity::prelude::AlimtalkTemplate::find()
            .filter(entity::alimtalk_template::Column::TemplateCode.eq(template_code))
            .one(self.db)
            .await
    }

    /// Every template ordered by code
    pub async fn list(&self) -> Result<Vec<entity::alimtalk_template::Model>, DbErr> {
        entity::prelude::AlimtalkTemplate::find()
            .order_by_asc(entity::alimtalk_template::Column::TemplateCode)
            .all(self.db)
            .await
    }

    /// Inserts a template or replaces the one registered under the same code
    ///
    /// Templates without an explicit status are stored as `PENDING`.
    pub async fn upsert(
        &self,
        template: UpsertAlimtalkTemplateDto,
    ) -> Result<entity::alimtalk_template::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let template = entity::alimtalk_template::ActiveModel {
            template_code: ActiveValue::Set(template.template_code),
            name: ActiveValue::Set(template.name),
            content: ActiveValue::Set(template.content),
            status: ActiveValue::Set(template.status.unwrap_or(TemplateStatus::Pending)),
            lms_failover: ActiveValue::Set(template.lms_failover),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::AlimtalkTemplate::insert(template)
            .on_conflict(
                OnConflict::column(entity::alimtalk_template::Column::TemplateCode)
                    .update_columns([
                        entity::alimtalk_template::Column::Name,
                        entity::alimtalk_template::Column::Content,
                        entity::alimtalk_template::Column::Status,
                        entity::alimtalk_template::Column::LmsFailover,
                        entity::alimtalk_template::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
