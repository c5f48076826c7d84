use entity::sea_orm_active_enums::MemberStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Member statuses that bulk consent uploads may match against.
pub const MATCHABLE_STATUSES: [MemberStatus; 2] =
    [MemberStatus::Approved, MemberStatus::PreRegistered];

/// Repository for `union_user` and `user_property_unit`
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new instance of [`MemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads every matchable member of a union together with their property units
    ///
    /// Members are ordered by id and their units by id, which fixes the order in which
    /// uploaded rows are matched.
    pub async fn get_matchable_with_units(
        &self,
        union_id: i32,
    ) -> Result<
        Vec<(
            entity::union_user::Model,
            Vec<entity::user_property_unit::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::UnionUser::find()
            .filter(entity::union_user::Column::UnionId.eq(union_id))
            .filter(entity::union_user::Column::Status.is_in(MATCHABLE_STATUSES))
            .order_by_asc(entity::union_user::Column::Id)
            .find_with_related(entity::prelude::UserPropertyUnit)
            .order_by_asc(entity::user_property_unit::Column::Id)
            .all(self.db)
            .await
    }

    /// Ids of the matchable members of a union
    pub async fn get_matchable_ids(&self, union_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UnionUser::find()
            .select_only()
            .column(entity::union_user::Column::Id)
            .filter(entity::union_user::Column::UnionId.eq(union_id))
            .filter(entity::union_user::Column::Status.is_in(MATCHABLE_STATUSES))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
