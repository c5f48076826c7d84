use sea_orm::DatabaseConnection;

use crate::{
    model::union::{CreateUnionDto, UnionDto, UpdateUnionDto},
    server::{
        data::union::UnionRepository,
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

/// Whether `slug` is usable in tenant URLs: non-empty lowercase ASCII letters, digits and `-`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Service for tenant unions, managed by the system administrator.
pub struct UnionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnionService<'a> {
    /// Creates a new instance of [`UnionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active union
    ///
    /// # Returns
    /// - `Ok(UnionDto)` - Created union
    /// - `Err(Error::ValidationError)` - Blank name, malformed slug or slug already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, mut union: CreateUnionDto) -> Result<UnionDto, Error> {
        union.name = union.name.trim().to_string();
        if union.name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name".to_string(),
                reason: "조합 이름이 필요합니다.".to_string(),
            }
            .into());
        }
        if !is_valid_slug(&union.slug) {
            return Err(ValidationError::InvalidSlug(union.slug).into());
        }

        let union_repo = UnionRepository::new(self.db);
        if union_repo.find_by_slug(&union.slug).await?.is_some() {
            return Err(ValidationError::DuplicateSlug(union.slug).into());
        }

        let union = union_repo.create(union).await?;

        tracing::info!("Created union {} ({})", union.id, union.slug);

        Ok(union.into())
    }

    /// Every union, disabled ones included, in creation order
    pub async fn list(&self) -> Result<Vec<UnionDto>, Error> {
        let unions = UnionRepository::new(self.db).list().await?;

        Ok(unions.into_iter().map(UnionDto::from).collect())
    }

    /// Active union by slug; disabled unions are reported as missing
    pub async fn get_by_slug(&self, slug: &str) -> Result<UnionDto, Error> {
        let union = UnionRepository::new(self.db)
            .get_active_by_slug(slug)
            .await?
            .ok_or_else(|| NotFoundError::UnionSlug(slug.to_string()))?;

        Ok(union.into())
    }

    /// Applies a partial update
    ///
    /// # Returns
    /// - `Ok(UnionDto)` - Updated union
    /// - `Err(Error::ValidationError)` - Name given but blank
    /// - `Err(Error::NotFoundError)` - Union does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, union_id: i32, mut changes: UpdateUnionDto) -> Result<UnionDto, Error> {
        if let Some(name) = changes.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::InvalidField {
                    field: "name".to_string(),
                    reason: "조합 이름이 필요합니다.".to_string(),
                }
                .into());
            }
        }

        let union = UnionRepository::new(self.db)
            .update(union_id, changes)
            .await?
            .ok_or(NotFoundError::Union(union_id))?;

        Ok(union.into())
    }

    /// Soft-disables a union; its data is kept
    pub async fn disable(&self, union_id: i32) -> Result<UnionDto, Error> {
        let union = self
            .update(
                union_id,
                UpdateUnionDto {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!("Disabled union {} ({})", union.id, union.slug);

        Ok(union)
    }
}
