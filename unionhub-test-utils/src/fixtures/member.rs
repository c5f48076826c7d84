use chrono::Utc;
use entity::sea_orm_active_enums::MemberStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn member<'a>(&'a mut self) -> MemberFixtures<'a> {
        MemberFixtures { setup: self }
    }
}

pub struct MemberFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> MemberFixtures<'a> {
    /// Insert a member without a phone number.
    pub async fn insert_member(
        &self,
        union_id: i32,
        name: &str,
        status: MemberStatus,
        property_address: Option<&str>,
    ) -> Result<entity::union_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::UnionUser::insert(entity::union_user::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                name: ActiveValue::Set(name.to_string()),
                phone: ActiveValue::Set(None),
                property_address: ActiveValue::Set(property_address.map(str::to_string)),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an approved member.
    pub async fn insert_approved_member(
        &self,
        union_id: i32,
        name: &str,
        property_address: Option<&str>,
    ) -> Result<entity::union_user::Model, TestError> {
        self.insert_member(union_id, name, MemberStatus::Approved, property_address)
            .await
    }

    /// Insert a property unit for a member.
    pub async fn insert_property_unit(
        &self,
        user_id: i32,
        jibun_address: Option<&str>,
        dong: Option<&str>,
        ho: Option<&str>,
    ) -> Result<entity::user_property_unit::Model, TestError> {
        Ok(
            entity::prelude::UserPropertyUnit::insert(entity::user_property_unit::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                jibun_address: ActiveValue::Set(jibun_address.map(str::to_string)),
                dong: ActiveValue::Set(dong.map(str::to_string)),
                ho: ActiveValue::Set(ho.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
