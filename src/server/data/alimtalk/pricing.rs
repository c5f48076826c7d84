use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::MessageType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository for the `alimtalk_pricing` history
pub struct AlimtalkPricingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlimtalkPricingRepository<'a, C> {
    /// Creates a new instance of [`AlimtalkPricingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a price row; earlier rows are kept as history
    pub async fn create(
        &self,
        message_type: MessageType,
        unit_price: f64,
        effective_from: NaiveDateTime,
    ) -> Result<entity::alimtalk_pricing::Model, DbErr> {
        let pricing = entity::alimtalk_pricing::ActiveModel {
            message_type: ActiveValue::Set(message_type),
            unit_price: ActiveValue::Set(unit_price),
            effective_from: ActiveValue::Set(effective_from),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pricing.insert(self.db).await
    }

    /// Every price row, latest `effective_from` first
    pub async fn history(&self) -> Result<Vec<entity::alimtalk_pricing::Model>, DbErr> {
        entity::prelude::AlimtalkPricing::find()
            .order_by_desc(entity::alimtalk_pricing::Column::EffectiveFrom)
            .order_by_desc(entity::alimtalk_pricing::Column::Id)
            .all(self.db)
            .await
    }

    /// The row in effect for `message_type` at `at`: greatest `effective_from <= at`
    ///
    /// Ties on `effective_from` go to the most recently inserted row.
    pub async fn get_effective(
        &self,
        message_type: MessageType,
        at: NaiveDateTime,
    ) -> Result<Option<entity::alimtalk_pricing::Model>, DbErr> {
        entity::prelude::AlimtalkPricing::find()
            .filter(entity::alimtalk_pricing::Column::MessageType.eq(message_type))
            .filter(entity::alimtalk_pricing::Column::EffectiveFrom.lte(at))
            .order_by_desc(entity::alimtalk_pricing::Column::EffectiveFrom)
            .order_by_desc(entity::alimtalk_pricing::Column::Id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get_effective {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::MessageType;
        use unionhub_test_utils::prelude::*;

        use crate::server::data::alimtalk::pricing::AlimtalkPricingRepository;

        /// Expect the latest row already in effect, ignoring future-dated rows
        #[tokio::test]
        async fn selects_latest_past_row() -> Result<(), TestError> {
            let now = Utc::now().naive_utc();
            let test = TestBuilder::new()
                .with_alimtalk_tables()
                .with_pricing(MessageType::Kakao, 7.5, now - Duration::days(30))
                .with_pricing(MessageType::Kakao, 8.0, now - Duration::days(1))
                .with_pricing(MessageType::Kakao, 9.0, now + Duration::days(1))
                .with_pricing(MessageType::Sms, 20.0, now - Duration::days(1))
                .build()
                .await?;

            let pricing_repo = AlimtalkPricingRepository::new(&test.db);
            let current = pricing_repo
                .get_effective(MessageType::Kakao, now)
                .await?
                .unwrap();

            assert_eq!(current.unit_price, 8.0);

            Ok(())
        }

        /// Expect None when only future rows exist
        #[tokio::test]
        async fn returns_none_before_first_row() -> Result<(), TestError> {
            let now = Utc::now().naive_utc();
            let test = TestBuilder::new()
                .with_alimtalk_tables()
                .with_pricing(MessageType::Lms, 50.0, now + Duration::days(1))
                .build()
                .await?;

            let pricing_repo = AlimtalkPricingRepository::new(&test.db);
            let current = pricing_repo.get_effective(MessageType::Lms, now).await?;

            assert!(current.is_none());

            Ok(())
        }
    }
}
