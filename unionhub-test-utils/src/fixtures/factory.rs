//! Factory functions for in-memory models.
//!
//! These build models with standard test values without touching the database, for unit
//! tests of pure logic such as row matching and log aggregation.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{MemberStatus, MessageType};

use crate::constant::{TEST_UNION_NAME, TEST_UNION_PHONE, TEST_UNION_SLUG};

/// Create the standard mock union model with id 1.
pub fn mock_union() -> entity::union_tenant::Model {
    let now = Utc::now().naive_utc();

    entity::union_tenant::Model {
        id: 1,
        name: TEST_UNION_NAME.to_string(),
        slug: TEST_UNION_SLUG.to_string(),
        phone: Some(TEST_UNION_PHONE.to_string()),
        business_hours: None,
        kakao_channel_id: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Create an approved member model belonging to union 1.
pub fn mock_member(id: i32, name: &str, property_address: Option<&str>) -> entity::union_user::Model {
    let now = Utc::now().naive_utc();

    entity::union_user::Model {
        id,
        union_id: 1,
        name: name.to_string(),
        phone: None,
        property_address: property_address.map(str::to_string),
        status: MemberStatus::Approved,
        created_at: now,
        updated_at: now,
    }
}

/// Create a property unit model.
pub fn mock_property_unit(
    id: i32,
    user_id: i32,
    jibun_address: Option<&str>,
    dong: Option<&str>,
    ho: Option<&str>,
) -> entity::user_property_unit::Model {
    entity::user_property_unit::Model {
        id,
        user_id,
        jibun_address: jibun_address.map(str::to_string),
        dong: dong.map(str::to_string),
        ho: ho.map(str::to_string),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create an owner model belonging to union 1 without a building unit.
pub fn mock_owner(id: i32, name: &str, phone: Option<&str>) -> entity::owner::Model {
    entity::owner::Model {
        id,
        union_id: 1,
        building_unit_id: None,
        user_id: None,
        name: name.to_string(),
        phone: phone.map(str::to_string),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a pricing model.
pub fn mock_pricing(
    id: i32,
    message_type: MessageType,
    unit_price: f64,
    effective_from: NaiveDateTime,
) -> entity::alimtalk_pricing::Model {
    entity::alimtalk_pricing::Model {
        id,
        message_type,
        unit_price,
        effective_from,
        created_at: effective_from,
    }
}

/// Create a send log model; `recipient_count` is the sum of the outcome counts.
pub fn mock_log(
    id: i32,
    (kakao, sms, fail): (i32, i32, i32),
    estimated_cost: f64,
) -> entity::alimtalk_log::Model {
    entity::alimtalk_log::Model {
        id,
        union_id: Some(1),
        template_code: "CONSENT_REMINDER".to_string(),
        title: "동의 독려".to_string(),
        recipient_count: kakao + sms + fail,
        kakao_success_count: kakao,
        sms_success_count: sms,
        fail_count: fail,
        estimated_cost,
        sent_at: Utc::now().naive_utc(),
    }
}
