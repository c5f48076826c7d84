use std::collections::HashMap;

use entity::sea_orm_active_enums::ConsentStatus;
use sea_orm::{
    sea_query::Query, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository for `owner` and the building units they own
pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an owner only if it belongs to `union_id`
    pub async fn get_for_union(
        &self,
        union_id: i32,
        owner_id: i32,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id)
            .filter(entity::owner::Column::UnionId.eq(union_id))
            .one(self.db)
            .await
    }

    /// Owners of a union that have not registered as members
    pub async fn get_unregistered(
        &self,
        union_id: i32,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::UnionId.eq(union_id))
            .filter(entity::owner::Column::UserId.is_null())
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    /// Owners of a union without an `AGREED` consent at `stage_id`
    ///
    /// Owners with no consent row at all are included.
    pub async fn get_not_agreed(
        &self,
        union_id: i32,
        stage_id: i32,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        let agreed_owner_ids = Query::select()
            .column(entity::owner_consent::Column::OwnerId)
            .from(entity::prelude::OwnerConsent)
            .and_where(entity::owner_consent::Column::StageId.eq(stage_id))
            .and_where(entity::owner_consent::Column::Status.eq(ConsentStatus::Agreed))
            .to_owned();

        entity::prelude::Owner::find()
            .filter(entity::owner::Column::UnionId.eq(union_id))
            .filter(entity::owner::Column::Id.not_in_subquery(agreed_owner_ids))
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    /// Human readable property location per building unit id
    ///
    /// The label is the land lot address followed by dong/ho when present, e.g.
    /// `"서울시 관악구 신림동 1-1 101동 1001호"`.
    pub async fn get_property_labels(
        &self,
        building_unit_ids: &[i32],
    ) -> Result<HashMap<i32, String>, DbErr> {
        if building_unit_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let units = entity::prelude::BuildingUnit::find()
            .filter(entity::building_unit::Column::Id.is_in(building_unit_ids.iter().copied()))
            .find_also_related(entity::prelude::LandLot)
            .all(self.db)
            .await?;

        Ok(units
            .into_iter()
            .map(|(unit, land_lot)| {
                let mut parts = Vec::new();
                if let Some(land_lot) = land_lot {
                    parts.push(land_lot.address);
                }
                if let Some(dong) = unit.dong.filter(|dong| !dong.is_empty()) {
                    parts.push(format!("{}동", dong));
                }
                if let Some(ho) = unit.ho.filter(|ho| !ho.is_empty()) {
                    parts.push(format!("{}호", ho));
                }

                (unit.id, parts.join(" "))
            })
            .collect())
    }
}
