use sea_orm::DatabaseConnection;

use crate::{
    model::alimtalk::{AlimtalkTemplateDto, UpsertAlimtalkTemplateDto},
    server::{
        data::alimtalk::template::AlimtalkTemplateRepository,
        error::{validation::ValidationError, Error},
    },
};

/// Service for the registry of templates approved by the message provider.
pub struct AlimtalkTemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlimtalkTemplateService<'a> {
    /// Creates a new instance of [`AlimtalkTemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every registered template
    pub async fn list(&self) -> Result<Vec<AlimtalkTemplateDto>, Error> {
        let templates = AlimtalkTemplateRepository::new(self.db).list().await?;

        Ok(templates.into_iter().map(AlimtalkTemplateDto::from).collect())
    }

    /// Registers a template or replaces the one with the same code
    ///
    /// # Returns
    /// - `Ok(AlimtalkTemplateDto)` - Stored template
    /// - `Err(Error::ValidationError)` - Blank template code or name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn upsert(
        &self,
        mut template: UpsertAlimtalkTemplateDto,
    ) -> Result<AlimtalkTemplateDto, Error> {
        template.template_code = template.template_code.trim().to_string();
        if template.template_code.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "templateCode".to_string(),
                reason: "템플릿 코드가 필요합니다.".to_string(),
            }
            .into());
        }
        if template.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name".to_string(),
                reason: "템플릿 이름이 필요합니다.".to_string(),
            }
            .into());
        }

        let template = AlimtalkTemplateRepository::new(self.db)
            .upsert(template)
            .await?;

        tracing::info!(
            "Stored alimtalk template {} ({:?})",
            template.template_code,
            template.status
        );

        Ok(template.into())
    }
}
