pub use super::alimtalk_log::Entity as AlimtalkLog;
pub use super::alimtalk_pricing::Entity as AlimtalkPricing;
pub use super::alimtalk_template::Entity as AlimtalkTemplate;
pub use super::building_unit::Entity as BuildingUnit;
pub use super::consent_stage::Entity as ConsentStage;
pub use super::land_lot::Entity as LandLot;
pub use super::member_invite::Entity as MemberInvite;
pub use super::owner::Entity as Owner;
pub use super::owner_consent::Entity as OwnerConsent;
pub use super::sync_job::Entity as SyncJob;
pub use super::union_tenant::Entity as UnionTenant;
pub use super::union_user::Entity as UnionUser;
pub use super::user_consent::Entity as UserConsent;
pub use super::user_property_unit::Entity as UserPropertyUnit;
