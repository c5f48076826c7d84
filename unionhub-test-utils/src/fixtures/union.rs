use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_UNION_NAME, TEST_UNION_PHONE, TEST_UNION_SLUG},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn union<'a>(&'a mut self) -> UnionFixtures<'a> {
        UnionFixtures { setup: self }
    }
}

pub struct UnionFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UnionFixtures<'a> {
    /// Insert an active union with the given name and slug.
    pub async fn insert_union(
        &self,
        name: &str,
        slug: &str,
    ) -> Result<entity::union_tenant::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::UnionTenant::insert(entity::union_tenant::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(slug.to_string()),
                phone: ActiveValue::Set(Some(TEST_UNION_PHONE.to_string())),
                business_hours: ActiveValue::Set(None),
                kakao_channel_id: ActiveValue::Set(None),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the standard mock union.
    pub async fn insert_mock_union(&self) -> Result<entity::union_tenant::Model, TestError> {
        self.insert_union(TEST_UNION_NAME, TEST_UNION_SLUG).await
    }
}
