use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{MessageType, TemplateStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn alimtalk<'a>(&'a mut self) -> AlimtalkFixtures<'a> {
        AlimtalkFixtures { setup: self }
    }
}

pub struct AlimtalkFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AlimtalkFixtures<'a> {
    pub async fn insert_template(
        &self,
        template_code: &str,
        status: TemplateStatus,
        lms_failover: bool,
    ) -> Result<entity::alimtalk_template::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AlimtalkTemplate::insert(entity::alimtalk_template::ActiveModel {
                template_code: ActiveValue::Set(template_code.to_string()),
                name: ActiveValue::Set(format!("{} 템플릿", template_code)),
                content: ActiveValue::Set("#{조합명} 안내".to_string()),
                status: ActiveValue::Set(status),
                lms_failover: ActiveValue::Set(lms_failover),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_pricing(
        &self,
        message_type: MessageType,
        unit_price: f64,
        effective_from: NaiveDateTime,
    ) -> Result<entity::alimtalk_pricing::Model, TestError> {
        Ok(
            entity::prelude::AlimtalkPricing::insert(entity::alimtalk_pricing::ActiveModel {
                message_type: ActiveValue::Set(message_type),
                unit_price: ActiveValue::Set(unit_price),
                effective_from: ActiveValue::Set(effective_from),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a send log with the given counts.
    ///
    /// `recipient_count` is the sum of the three outcome counts.
    pub async fn insert_log(
        &self,
        union_id: Option<i32>,
        template_code: &str,
        (kakao, sms, fail): (i32, i32, i32),
        estimated_cost: f64,
        sent_at: NaiveDateTime,
    ) -> Result<entity::alimtalk_log::Model, TestError> {
        Ok(
            entity::prelude::AlimtalkLog::insert(entity::alimtalk_log::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                template_code: ActiveValue::Set(template_code.to_string()),
                title: ActiveValue::Set(format!("{} 발송", template_code)),
                recipient_count: ActiveValue::Set(kakao + sms + fail),
                kakao_success_count: ActiveValue::Set(kakao),
                sms_success_count: ActiveValue::Set(sms),
                fail_count: ActiveValue::Set(fail),
                estimated_cost: ActiveValue::Set(estimated_cost),
                sent_at: ActiveValue::Set(sent_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
