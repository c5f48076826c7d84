use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::union::{CreateUnionDto, UpdateUnionDto};

/// Repository for `union_tenant`
pub struct UnionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnionRepository<'a, C> {
    /// Creates a new instance of [`UnionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active union
    pub async fn create(
        &self,
        union: CreateUnionDto,
    ) -> Result<entity::union_tenant::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let union = entity::union_tenant::ActiveModel {
            name: ActiveValue::Set(union.name),
            slug: ActiveValue::Set(union.slug),
            phone: ActiveValue::Set(union.phone),
            business_hours: ActiveValue::Set(union.business_hours),
            kakao_channel_id: ActiveValue::Set(union.kakao_channel_id),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        union.insert(self.db).await
    }

    /// Union with the given id, active or not
    pub async fn get(&self, union_id: i32) -> Result<Option<entity::union_tenant::Model>, DbErr> {
        entity::prelude::UnionTenant::find_by_id(union_id)
            .one(self.db)
            .await
    }

    /// Finds a union by slug regardless of whether it is active
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::union_tenant::Model>, DbErr> {
        entity::prelude::UnionTenant::find()
            .filter(entity::union_tenant::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Finds an active union by slug, disabled unions are treated as absent
    pub async fn get_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::union_tenant::Model>, DbErr> {
        entity::prelude::UnionTenant::find()
            .filter(entity::union_tenant::Column::Slug.eq(slug))
            .filter(entity::union_tenant::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Every union ordered by id
    pub async fn list(&self) -> Result<Vec<entity::union_tenant::Model>, DbErr> {
        entity::prelude::UnionTenant::find()
            .order_by_asc(entity::union_tenant::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `changes`
    ///
    /// Returns `Ok(None)` if the union does not exist.
    pub async fn update(
        &self,
        union_id: i32,
        changes: UpdateUnionDto,
    ) -> Result<Option<entity::union_tenant::Model>, DbErr> {
        let union = match entity::prelude::UnionTenant::find_by_id(union_id)
            .one(self.db)
            .await?
        {
            Some(union) => union,
            None => return Ok(None),
        };

        let mut union_am = union.into_active_model();
        if let Some(name) = changes.name {
            union_am.name = ActiveValue::Set(name);
        }
        if let Some(phone) = changes.phone {
            union_am.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(business_hours) = changes.business_hours {
            union_am.business_hours = ActiveValue::Set(Some(business_hours));
        }
        if let Some(kakao_channel_id) = changes.kakao_channel_id {
            union_am.kakao_channel_id = ActiveValue::Set(Some(kakao_channel_id));
        }
        if let Some(is_active) = changes.is_active {
            union_am.is_active = ActiveValue::Set(is_active);
        }
        union_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let union = union_am.update(self.db).await?;

        Ok(Some(union))
    }
}
