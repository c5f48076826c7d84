use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::MessageType;
use sea_orm::{DatabaseConnection, Iterable};

use crate::{
    model::alimtalk::{CreatePricingDto, CurrentPriceDto, PricingDto, PricingOverviewDto},
    server::{
        data::alimtalk::pricing::AlimtalkPricingRepository,
        error::{validation::ValidationError, Error},
    },
};

/// Unit prices in effect at one instant, keyed by message type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<MessageType, f64>,
}

impl PriceTable {
    /// Builds a table from [`AlimtalkPricingService::current_prices`] output
    pub fn from_current(current: &[CurrentPriceDto]) -> Self {
        Self {
            prices: current
                .iter()
                .map(|price| (price.message_type, price.unit_price))
                .collect(),
        }
    }

    /// Unit price of `message_type`, 0 when no price is on file
    pub fn price_of(&self, message_type: MessageType) -> f64 {
        self.prices.get(&message_type).copied().unwrap_or(0.0)
    }
}

/// Service for the append-only unit price history.
pub struct AlimtalkPricingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlimtalkPricingService<'a> {
    /// Creates a new instance of [`AlimtalkPricingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Price in effect at `at` for every message type.
    ///
    /// The effective row is the one with the greatest `effective_from` not after `at`, so
    /// future-dated rows are ignored until their date passes. Types without such a row report
    /// a price of 0.
    pub async fn current_prices(&self, at: NaiveDateTime) -> Result<Vec<CurrentPriceDto>, Error> {
        let pricing_repo = AlimtalkPricingRepository::new(self.db);

        let mut current = Vec::new();
        for message_type in MessageType::iter() {
            let price = pricing_repo.get_effective(message_type, at).await?;

            current.push(match price {
                Some(price) => CurrentPriceDto {
                    message_type,
                    unit_price: price.unit_price,
                    effective_from: Some(price.effective_from),
                },
                None => CurrentPriceDto {
                    message_type,
                    unit_price: 0.0,
                    effective_from: None,
                },
            });
        }

        Ok(current)
    }

    /// [`PriceTable`] of the prices in effect now
    pub async fn price_table(&self) -> Result<PriceTable, Error> {
        let current = self.current_prices(Utc::now().naive_utc()).await?;

        Ok(PriceTable::from_current(&current))
    }

    /// Current prices together with the full history, newest first
    pub async fn overview(&self) -> Result<PricingOverviewDto, Error> {
        let current = self.current_prices(Utc::now().naive_utc()).await?;
        let history = AlimtalkPricingRepository::new(self.db).history().await?;

        Ok(PricingOverviewDto {
            current,
            history: history.into_iter().map(PricingDto::from).collect(),
        })
    }

    /// Appends a price row, effective now unless a date is given
    ///
    /// # Returns
    /// - `Ok(PricingDto)` - Stored row
    /// - `Err(Error::ValidationError)` - Negative or non-finite unit price
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, pricing: CreatePricingDto) -> Result<PricingDto, Error> {
        if !pricing.unit_price.is_finite() || pricing.unit_price < 0.0 {
            return Err(ValidationError::InvalidField {
                field: "unitPrice".to_string(),
                reason: "단가는 0 이상이어야 합니다.".to_string(),
            }
            .into());
        }

        let effective_from = pricing
            .effective_from
            .unwrap_or_else(|| Utc::now().naive_utc());

        let pricing = AlimtalkPricingRepository::new(self.db)
            .create(pricing.message_type, pricing.unit_price, effective_from)
            .await?;

        tracing::info!(
            "Added {:?} unit price {} effective from {}",
            pricing.message_type,
            pricing.unit_price,
            pricing.effective_from
        );

        Ok(pricing.into())
    }
}

#[cfg(test)]
mod tests {

    mod current_prices {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::MessageType;
        use unionhub_test_utils::prelude::*;

        use crate::server::service::alimtalk::pricing::{AlimtalkPricingService, PriceTable};

        /// Expect the latest past row per type, ignoring future rows, and 0 for missing types
        #[tokio::test]
        async fn ignores_future_rows() -> Result<(), TestError> {
            let now = Utc::now().naive_utc();
            let test = TestBuilder::new()
                .with_alimtalk_tables()
                .with_pricing(MessageType::Kakao, 8.0, now - Duration::days(30))
                .with_pricing(MessageType::Kakao, 9.0, now - Duration::days(1))
                .with_pricing(MessageType::Kakao, 12.0, now + Duration::days(1))
                .with_pricing(MessageType::Sms, 20.0, now - Duration::days(10))
                .build()
                .await?;

            let service = AlimtalkPricingService::new(&test.db);
            let current = service.current_prices(now).await.unwrap();
            let table = PriceTable::from_current(&current);

            assert_eq!(current.len(), 3);
            assert_eq!(table.price_of(MessageType::Kakao), 9.0);
            assert_eq!(table.price_of(MessageType::Sms), 20.0);
            assert_eq!(table.price_of(MessageType::Lms), 0.0);
            let lms = current
                .iter()
                .find(|price| price.message_type == MessageType::Lms)
                .unwrap();
            assert!(lms.effective_from.is_none());

            Ok(())
        }

        /// Expect a future row to take effect once its date has passed
        #[tokio::test]
        async fn future_row_applies_after_its_date() -> Result<(), TestError> {
            let now = Utc::now().naive_utc();
            let test = TestBuilder::new()
                .with_alimtalk_tables()
                .with_pricing(MessageType::Kakao, 9.0, now - Duration::days(1))
                .with_pricing(MessageType::Kakao, 12.0, now + Duration::days(1))
                .build()
                .await?;

            let service = AlimtalkPricingService::new(&test.db);
            let later = service
                .current_prices(now + Duration::days(2))
                .await
                .unwrap();

            assert_eq!(PriceTable::from_current(&later).price_of(MessageType::Kakao), 12.0);

            Ok(())
        }
    }

    mod create {
        use entity::sea_orm_active_enums::MessageType;
        use unionhub_test_utils::prelude::*;

        use crate::{
            model::alimtalk::CreatePricingDto,
            server::{error::Error, service::alimtalk::pricing::AlimtalkPricingService},
        };

        /// Expect negative prices to be rejected
        #[tokio::test]
        async fn rejects_negative_price() -> Result<(), TestError> {
            let test = TestBuilder::new().with_alimtalk_tables().build().await?;

            let service = AlimtalkPricingService::new(&test.db);
            let result = service
                .create(CreatePricingDto {
                    message_type: MessageType::Sms,
                    unit_price: -1.0,
                    effective_from: None,
                })
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }

        /// Expect a row without date to be effective immediately
        #[tokio::test]
        async fn defaults_to_now() -> Result<(), TestError> {
            let test = TestBuilder::new().with_alimtalk_tables().build().await?;

            let service = AlimtalkPricingService::new(&test.db);
            service
                .create(CreatePricingDto {
                    message_type: MessageType::Lms,
                    unit_price: 0.0,
                    effective_from: None,
                })
                .await
                .unwrap();
            let overview = service.overview().await.unwrap();

            assert_eq!(overview.history.len(), 1);
            let lms = overview
                .current
                .iter()
                .find(|price| price.message_type == MessageType::Lms)
                .unwrap();
            assert!(lms.effective_from.is_some());

            Ok(())
        }
    }
}
