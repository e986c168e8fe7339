use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user_profile::UserProfile;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;
    /// Perfiles manager/hr_admin que actúan en `module`
    async fn find_approvers(&self, module: &str) -> AppResult<Vec<UserProfile>>;
}

pub struct PgUserProfileRepository {
    pool: PgPool,
}

impl PgUserProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for PgUserProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn find_approvers(&self, module: &str) -> AppResult<Vec<UserProfile>> {
        let result = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT * FROM user_profiles
            WHERE role IN ('manager', 'hr_admin') AND module = $1
            ORDER BY full_name
            "#,
        )
        .bind(module)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}
