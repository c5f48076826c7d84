pub use sea_orm_migration::prelude::*;

mod m20251020_000001_union_tenant;
mod m20251020_000002_union_user;
mod m20251020_000003_user_property_unit;
mod m20251020_000004_land_lot;
mod m20251020_000005_building_unit;
mod m20251020_000006_owner;
mod m20251020_000007_consent_stage;
mod m20251020_000008_user_consent;
mod m20251020_000009_owner_consent;
mod m20251020_000010_alimtalk_template;
mod m20251020_000011_alimtalk_log;
mod m20251020_000012_alimtalk_pricing;
mod m20251020_000013_sync_job;
mod m20251020_000014_member_invite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_union_tenant::Migration),
            Box::new(m20251020_000002_union_user::Migration),
            Box::new(m20251020_000003_user_property_unit::Migration),
            Box::new(m20251020_000004_land_lot::Migration),
            Box::new(m20251020_000005_building_unit::Migration),
            Box::new(m20251020_000006_owner::Migration),
            Box::new(m20251020_000007_consent_stage::Migration),
            Box::new(m20251020_000008_user_consent::Migration),
            Box::new(m20251020_000009_owner_consent::Migration),
            Box::new(m20251020_000010_alimtalk_template::Migration),
            Box::new(m20251020_000011_alimtalk_log::Migration),
            Box::new(m20251020_000012_alimtalk_pricing::Migration),
            Box::new(m20251020_000013_sync_job::Migration),
            Box::new(m20251020_000014_member_invite::Migration),
        ]
    }
}
