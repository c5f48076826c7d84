//! Database model type aliases.
//!
//! Short names for the SeaORM models from the `entity` crate, used in repository and service
//! signatures.

/// A tenant union; root of all tenant-scoped data.
pub type UnionModel = entity::union_tenant::Model;

/// A union member as matched by bulk consent uploads.
///
/// # Fields (from `entity::union_user::Model`)
/// - `id` - Primary key
/// - `union_id` - Owning union
/// - `name` - Member name, compared case-insensitively when matching uploaded rows
/// - `phone` - Contact number (nullable)
/// - `property_address` - Member-level address, used when the member has no property units
/// - `status` - Only `APPROVED` and `PRE_REGISTERED` members take part in matching
pub type MemberModel = entity::union_user::Model;

/// A property unit registered by a member.
pub type MemberPropertyUnitModel = entity::user_property_unit::Model;

/// A property owner; the source of reminder recipients.
pub type OwnerModel = entity::owner::Model;

/// Type alias for a consent stage of a union.
pub type ConsentStageModel = entity::consent_stage::Model;

/// Type alias for a member consent at a stage.
pub type UserConsentModel = entity::user_consent::Model;

/// Type alias for an owner consent at a stage.
pub type OwnerConsentModel = entity::owner_consent::Model;

/// Type alias for a registered alimtalk template.
pub type AlimtalkTemplateModel = entity::alimtalk_template::Model;

/// Type alias for an alimtalk send log row.
pub type AlimtalkLogModel = entity::alimtalk_log::Model;

/// A unit price row; rows are append-only and selected by `effective_from`.
pub type AlimtalkPricingModel = entity::alimtalk_pricing::Model;

/// A tracked long-running job such as a delegated bulk upload.
pub type SyncJobModel = entity::sync_job::Model;

/// Type alias for an owner invite token.
pub type MemberInviteModel = entity::member_invite::Model;
