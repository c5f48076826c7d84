//! SeaORM entity models for the unionhub schema.
//!
//! The tables mirror the migrations in the `migration` crate. Tenant-scoped tables carry a
//! `union_id` pointing at [`union_tenant`].

pub mod prelude;

pub mod alimtalk_log;
pub mod alimtalk_pricing;
pub mod alimtalk_template;
pub mod building_unit;
pub mod consent_stage;
pub mod land_lot;
pub mod member_invite;
pub mod owner;
pub mod owner_consent;
pub mod sea_orm_active_enums;
pub mod sync_job;
pub mod union_tenant;
pub mod union_user;
pub mod user_consent;
pub mod user_property_unit;
