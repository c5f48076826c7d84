use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn owner<'a>(&'a mut self) -> OwnerFixtures<'a> {
        OwnerFixtures { setup: self }
    }
}

pub struct OwnerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> OwnerFixtures<'a> {
    pub async fn insert_land_lot(
        &self,
        union_id: i32,
        pnu: &str,
        address: &str,
    ) -> Result<entity::land_lot::Model, TestError> {
        Ok(
            entity::prelude::LandLot::insert(entity::land_lot::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                pnu: ActiveValue::Set(pnu.to_string()),
                address: ActiveValue::Set(address.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_building_unit(
        &self,
        land_lot_id: i32,
        dong: Option<&str>,
        ho: Option<&str>,
    ) -> Result<entity::building_unit::Model, TestError> {
        Ok(
            entity::prelude::BuildingUnit::insert(entity::building_unit::ActiveModel {
                land_lot_id: ActiveValue::Set(land_lot_id),
                dong: ActiveValue::Set(dong.map(str::to_string)),
                ho: ActiveValue::Set(ho.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an owner without a building unit.
    pub async fn insert_owner(
        &self,
        union_id: i32,
        name: &str,
        phone: Option<&str>,
        user_id: Option<i32>,
    ) -> Result<entity::owner::Model, TestError> {
        self.insert_owner_of_unit(union_id, None, name, phone, user_id)
            .await
    }

    pub async fn insert_owner_of_unit(
        &self,
        union_id: i32,
        building_unit_id: Option<i32>,
        name: &str,
        phone: Option<&str>,
        user_id: Option<i32>,
    ) -> Result<entity::owner::Model, TestError> {
        Ok(
            entity::prelude::Owner::insert(entity::owner::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                building_unit_id: ActiveValue::Set(building_unit_id),
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                phone: ActiveValue::Set(phone.map(str::to_string)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a land lot, a building unit on it and an owner of that unit.
    pub async fn insert_owner_with_unit(
        &self,
        union_id: i32,
        pnu: &str,
        address: &str,
        name: &str,
        phone: Option<&str>,
    ) -> Result<
        (
            entity::land_lot::Model,
            entity::building_unit::Model,
            entity::owner::Model,
        ),
        TestError,
    > {
        let land_lot = self.insert_land_lot(union_id, pnu, address).await?;
        let building_unit = self
            .insert_building_unit(land_lot.id, Some("101"), Some("1001"))
            .await?;
        let owner = self
            .insert_owner_of_unit(union_id, Some(building_unit.id), name, phone, None)
            .await?;

        Ok((land_lot, building_unit, owner))
    }
}
