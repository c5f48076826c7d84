use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository for `consent_stage`
pub struct ConsentStageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConsentStageRepository<'a, C> {
    /// Creates a new instance of [`ConsentStageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a stage at the given sort order
    pub async fn create(
        &self,
        union_id: i32,
        name: String,
        sort_order: i32,
    ) -> Result<entity::consent_stage::Model, DbErr> {
        let stage = entity::consent_stage::ActiveModel {
            union_id: ActiveValue::Set(union_id),
            name: ActiveValue::Set(name),
            sort_order: ActiveValue::Set(sort_order),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        stage.insert(self.db).await
    }

    /// Finds a stage only if it belongs to `union_id`
    pub async fn get_for_union(
        &self,
        union_id: i32,
        stage_id: i32,
    ) -> Result<Option<entity::consent_stage::Model>, DbErr> {
        entity::prelude::ConsentStage::find_by_id(stage_id)
            .filter(entity::consent_stage::Column::UnionId.eq(union_id))
            .one(self.db)
            .await
    }

    /// Stages of a union in display order
    pub async fn list_by_union(
        &self,
        union_id: i32,
    ) -> Result<Vec<entity::consent_stage::Model>, DbErr> {
        entity::prelude::ConsentStage::find()
            .filter(entity::consent_stage::Column::UnionId.eq(union_id))
            .order_by_asc(entity::consent_stage::Column::SortOrder)
            .order_by_asc(entity::consent_stage::Column::Id)
            .all(self.db)
            .await
    }

    /// Sort order placing a new stage after every existing stage of the union
    pub async fn next_sort_order(&self, union_id: i32) -> Result<i32, DbErr> {
        let max_sort_order = entity::prelude::ConsentStage::find()
            .select_only()
            .column_as(entity::consent_stage::Column::SortOrder.max(), "max_sort_order")
            .filter(entity::consent_stage::Column::UnionId.eq(union_id))
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(max_sort_order.map_or(1, |max| max + 1))
    }
}
