//! Declarative test builder.
//!
//! `TestBuilder` queues table creation, fixtures and mock proxy endpoints; everything runs in
//! `build()`. Table groups pull in the tables they reference through foreign keys, so
//! combining groups never creates a table twice.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{MessageType, TemplateStatus};
use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// mock fixtures, and HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
#[derive(Default)]
pub struct TestBuilder {
    // Table groups
    include_union_tables: bool,
    include_member_tables: bool,
    include_stage_tables: bool,
    include_user_consent_tables: bool,
    include_owner_tables: bool,
    include_alimtalk_tables: bool,
    include_sync_job_table: bool,
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert
    mock_union: bool,
    templates: Vec<(String, TemplateStatus, bool)>,
    pricing: Vec<(MessageType, f64, NaiveDateTime)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    bulk_upload_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
    send_message_endpoints: Vec<(serde_json::Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the `union_tenant` table.
    pub fn with_union_tables(mut self) -> Self {
        self.include_union_tables = true;
        self
    }

    /// Add member tables: `union_user` and `user_property_unit`, plus the union table.
    pub fn with_member_tables(mut self) -> Self {
        self.include_union_tables = true;
        self.include_member_tables = true;
        self
    }

    /// Add member consent tables.
    ///
    /// Creates union, member, `consent_stage` and `user_consent` tables along with the
    /// unique `(user_id, stage_id)` index the consent upsert conflicts on.
    pub fn with_consent_tables(mut self) -> Self {
        self.include_union_tables = true;
        self.include_member_tables = true;
        self.include_stage_tables = true;
        self.include_user_consent_tables = true;
        self
    }

    /// Add owner tables.
    ///
    /// Creates union, `land_lot`, `building_unit`, `owner`, `consent_stage`,
    /// `owner_consent` and `member_invite` tables along with the unique
    /// `(owner_id, stage_id)` index.
    pub fn with_owner_tables(mut self) -> Self {
        self.include_union_tables = true;
        self.include_stage_tables = true;
        self.include_owner_tables = true;
        self
    }

    /// Add alimtalk tables: templates, pricing history and send logs, plus the union table.
    pub fn with_alimtalk_tables(mut self) -> Self {
        self.include_union_tables = true;
        self.include_alimtalk_tables = true;
        self
    }

    /// Add the `sync_job` table, plus the union table.
    pub fn with_sync_job_table(mut self) -> Self {
        self.include_union_tables = true;
        self.include_sync_job_table = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Custom tables are created after all table groups.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the standard mock union (see [`crate::constant`]).
    ///
    /// Requires union tables; the union is the first row and therefore has id 1.
    pub fn with_mock_union(mut self) -> Self {
        self.mock_union = true;
        self
    }

    /// Insert an alimtalk template. Requires alimtalk tables.
    pub fn with_template(
        mut self,
        template_code: impl Into<String>,
        status: TemplateStatus,
        lms_failover: bool,
    ) -> Self {
        self.templates
            .push((template_code.into(), status, lms_failover));
        self
    }

    /// Insert a unit price row. Requires alimtalk tables.
    pub fn with_pricing(
        mut self,
        message_type: MessageType,
        unit_price: f64,
        effective_from: NaiveDateTime,
    ) -> Self {
        self.pricing.push((message_type, unit_price, effective_from));
        self
    }

    /// Add a mock bulk upload hand-off endpoint answering with `status`.
    pub fn with_bulk_upload_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.bulk_upload_endpoints.push((status, expected_requests));
        self
    }

    /// Add a mock message send endpoint answering 200 with `response` as JSON body.
    pub fn with_send_message_endpoint(
        mut self,
        response: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.send_message_endpoints
            .push((response, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates table groups in foreign key order, their unique indexes, then custom tables
    /// 2. Inserts database fixtures (union, templates, pricing)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then proxy shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();
        let mut indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_union_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::UnionTenant));
        }

        if self.include_member_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::UnionUser),
                schema.create_table_from_entity(entity::prelude::UserPropertyUnit),
            ]);
        }

        if self.include_stage_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::ConsentStage));
        }

        if self.include_user_consent_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::UserConsent));
            indexes.push(
                Index::create()
                    .name("uq-user_consent-user_id-stage_id")
                    .table(entity::prelude::UserConsent)
                    .col(entity::user_consent::Column::UserId)
                    .col(entity::user_consent::Column::StageId)
                    .unique()
                    .to_owned(),
            );
        }

        if self.include_owner_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::LandLot),
                schema.create_table_from_entity(entity::prelude::BuildingUnit),
                schema.create_table_from_entity(entity::prelude::Owner),
                schema.create_table_from_entity(entity::prelude::OwnerConsent),
                schema.create_table_from_entity(entity::prelude::MemberInvite),
            ]);
            indexes.push(
                Index::create()
                    .name("uq-owner_consent-owner_id-stage_id")
                    .table(entity::prelude::OwnerConsent)
                    .col(entity::owner_consent::Column::OwnerId)
                    .col(entity::owner_consent::Column::StageId)
                    .unique()
                    .to_owned(),
            );
        }

        if self.include_alimtalk_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AlimtalkTemplate),
                schema.create_table_from_entity(entity::prelude::AlimtalkPricing),
                schema.create_table_from_entity(entity::prelude::AlimtalkLog),
            ]);
        }

        if self.include_sync_job_table {
            all_tables.push(schema.create_table_from_entity(entity::prelude::SyncJob));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(indexes).await?;

        // 2. Insert database fixtures
        if self.mock_union {
            setup.union().insert_mock_union().await?;
        }

        for (template_code, status, lms_failover) in self.templates {
            setup
                .alimtalk()
                .insert_template(&template_code, status, lms_failover)
                .await?;
        }

        for (message_type, unit_price, effective_from) in self.pricing {
            setup
                .alimtalk()
                .insert_pricing(message_type, unit_price, effective_from)
                .await?;
        }

        // 3. Create mock endpoints
        // Note: Custom endpoints are created first so tests can stack several mocks on the
        // same path and rely on mockito's sequential matching
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (status, expected) in self.bulk_upload_endpoints {
            mocks.push(setup.proxy().create_bulk_upload_endpoint(status, expected));
        }

        for (response, expected) in self.send_message_endpoints {
            mocks.push(setup.proxy().create_send_message_endpoint(response, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}
