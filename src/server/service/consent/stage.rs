use entity::sea_orm_active_enums::ConsentStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::consent::{ConsentStageDto, ConsentSummaryDto, CreateConsentStageDto},
    server::{
        data::{
            consent::{stage::ConsentStageRepository, user_consent::UserConsentRepository},
            member::MemberRepository,
            union::UnionRepository,
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

/// Service for the consent stages of a union.
pub struct ConsentStageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConsentStageService<'a> {
    /// Creates a new instance of [`ConsentStageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stages of a union in display order
    ///
    /// # Returns
    /// - `Ok(Vec<ConsentStageDto>)` - Stages ordered by sort order
    /// - `Err(Error::NotFoundError)` - Union does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self, union_id: i32) -> Result<Vec<ConsentStageDto>, Error> {
        self.ensure_union(union_id).await?;

        let stages = ConsentStageRepository::new(self.db)
            .list_by_union(union_id)
            .await?;

        Ok(stages.into_iter().map(ConsentStageDto::from).collect())
    }

    /// Adds a stage to a union
    ///
    /// Without an explicit sort order the stage is placed after every existing stage.
    ///
    /// # Returns
    /// - `Ok(ConsentStageDto)` - Created stage
    /// - `Err(Error::ValidationError)` - Blank stage name
    /// - `Err(Error::NotFoundError)` - Union does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        union_id: i32,
        stage: CreateConsentStageDto,
    ) -> Result<ConsentStageDto, Error> {
        let name = stage.name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name".to_string(),
                reason: "동의 단계 이름이 필요합니다.".to_string(),
            }
            .into());
        }

        self.ensure_union(union_id).await?;

        let stage_repo = ConsentStageRepository::new(self.db);
        let sort_order = match stage.sort_order {
            Some(sort_order) => sort_order,
            None => stage_repo.next_sort_order(union_id).await?,
        };

        let stage = stage_repo
            .create(union_id, name.to_string(), sort_order)
            .await?;

        Ok(stage.into())
    }

    /// Consent counts at a stage over the matchable members of the union
    ///
    /// Members without a consent row at the stage count as pending.
    ///
    /// # Returns
    /// - `Ok(ConsentSummaryDto)` - Agreed, disagreed and pending counts
    /// - `Err(Error::NotFoundError)` - Stage does not exist in the union
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn summary(&self, union_id: i32, stage_id: i32) -> Result<ConsentSummaryDto, Error> {
        if ConsentStageRepository::new(self.db)
            .get_for_union(union_id, stage_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::ConsentStage(stage_id).into());
        }

        let member_ids = MemberRepository::new(self.db)
            .get_matchable_ids(union_id)
            .await?;
        let consents = UserConsentRepository::new(self.db)
            .get_by_stage_for_users(stage_id, &member_ids)
            .await?;

        let agreed = consents
            .iter()
            .filter(|consent| consent.status == ConsentStatus::Agreed)
            .count() as u64;
        let disagreed = consents.len() as u64 - agreed;
        let pending = member_ids.len().saturating_sub(consents.len()) as u64;

        Ok(ConsentSummaryDto {
            stage_id,
            agreed,
            disagreed,
            pending,
        })
    }

    async fn ensure_union(&self, union_id: i32) -> Result<(), Error> {
        match UnionRepository::new(self.db).get(union_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::Union(union_id).into()),
        }
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use unionhub_test_utils::prelude::*;

        use crate::{
            model::consent::CreateConsentStageDto,
            server::{error::Error, service::consent::stage::ConsentStageService},
        };

        /// Expect stages without a sort order to be appended after existing ones
        #[tokio::test]
        async fn appends_after_existing_stages() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_consent_tables().build().await?;
            let union = test.union().insert_mock_union().await?;
            test.consent().insert_stage(union.id, "추진위 동의", 3).await?;

            let service = ConsentStageService::new(&test.db);
            let stage = service
                .create(
                    union.id,
                    CreateConsentStageDto {
                        name: " 조합설립 동의 ".to_string(),
                        sort_order: None,
                    },
                )
                .await
                .unwrap();

            assert_eq!(stage.name, "조합설립 동의");
            assert_eq!(stage.sort_order, 4);

            Ok(())
        }

        /// Expect a blank name to be rejected
        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_consent_tables().build().await?;
            let union = test.union().insert_mock_union().await?;

            let service = ConsentStageService::new(&test.db);
            let result = service
                .create(
                    union.id,
                    CreateConsentStageDto {
                        name: "  ".to_string(),
                        sort_order: Some(1),
                    },
                )
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }

        /// Expect NotFound for a union that does not exist
        #[tokio::test]
        async fn fails_for_missing_union() -> Result<(), TestError> {
            let test = TestBuilder::new().with_consent_tables().build().await?;

            let service = ConsentStageService::new(&test.db);
            let result = service
                .create(
                    1,
                    CreateConsentStageDto {
                        name: "조합설립 동의".to_string(),
                        sort_order: None,
                    },
                )
                .await;

            assert!(matches!(result, Err(Error::NotFoundError(_))));

            Ok(())
        }
    }

    mod summary {
        use entity::sea_orm_active_enums::{ConsentStatus, MemberStatus};
        use unionhub_test_utils::prelude::*;

        use crate::server::{error::Error, service::consent::stage::ConsentStageService};

        /// Expect counts over matchable members only, with missing rows as pending
        #[tokio::test]
        async fn counts_matchable_members() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_consent_tables().build().await?;
            let union = test.union().insert_mock_union().await?;
            let stage = test.consent().insert_stage(union.id, "조합설립 동의", 1).await?;

            let agreed = test
                .member()
                .insert_approved_member(union.id, "김철수", None)
                .await?;
            let disagreed = test
                .member()
                .insert_member(union.id, "이영희", MemberStatus::PreRegistered, None)
                .await?;
            test.member()
                .insert_approved_member(union.id, "박민수", None)
                .await?;
            let rejected = test
                .member()
                .insert_member(union.id, "최지우", MemberStatus::Rejected, None)
                .await?;

            test.consent()
                .insert_user_consent(agreed.id, stage.id, ConsentStatus::Agreed)
                .await?;
            test.consent()
                .insert_user_consent(disagreed.id, stage.id, ConsentStatus::Disagreed)
                .await?;
            test.consent()
                .insert_user_consent(rejected.id, stage.id, ConsentStatus::Agreed)
                .await?;

            let service = ConsentStageService::new(&test.db);
            let summary = service.summary(union.id, stage.id).await.unwrap();

            assert_eq!(summary.agreed, 1);
            assert_eq!(summary.disagreed, 1);
            assert_eq!(summary.pending, 1);

            Ok(())
        }

        /// Expect NotFound for a stage of another union
        #[tokio::test]
        async fn fails_for_stage_of_other_union() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_consent_tables().build().await?;
            let union = test.union().insert_mock_union().await?;
            let other = test.union().insert_union("다른 조합", "other").await?;
            let stage = test.consent().insert_stage(other.id, "조합설립 동의", 1).await?;

            let service = ConsentStageService::new(&test.db);
            let result = service.summary(union.id, stage.id).await;

            assert!(matches!(result, Err(Error::NotFoundError(_))));

            Ok(())
        }
    }
}
