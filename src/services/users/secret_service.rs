//! 비밀 제출 및 목록 서비스

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::dto::SubmitSecretRequest;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

pub struct SecretService {
    users: Arc<dyn UserStore>,
}

impl SecretService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 사용자의 비밀을 덮어씁니다. 앞뒤 공백은 제거하고 저장합니다.
    ///
    /// 세션의 사용자가 더 이상 존재하지 않으면 `Unauthenticated`입니다.
    pub async fn submit_secret(&self, user_id: &str, request: &SubmitSecretRequest) -> AppResult<()> {
        request.validate()?;

        let updated = self.users
            .set_secret(user_id, request.secret.trim())
            .await?;

        if !updated {
            return Err(AppError::Unauthenticated);
        }

        info!("비밀 제출: 사용자 ID {}", user_id);
        Ok(())
    }

    /// 비밀이 있는 모든 사용자의 비밀 (작성자 비공개)
    pub async fn list_secrets(&self) -> AppResult<Vec<String>> {
        self.users.list_secrets().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::MAX_SECRET_LENGTH;
    use crate::domain::entities::users::User;
    use crate::repositories::users::InMemoryUserStore;

    fn request(secret: &str) -> SubmitSecretRequest {
        SubmitSecretRequest { secret: secret.to_string() }
    }

    #[actix_web::test]
    async fn test_submit_overwrites_and_trims() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = SecretService::new(store.clone());
        let user = store.create(User::new_local("alice".into(), "h".into())).await.unwrap();

        service.submit_secret(&user.id_string(), &request("first")).await.unwrap();
        service.submit_secret(&user.id_string(), &request("  second  ")).await.unwrap();

        assert_eq!(service.list_secrets().await.unwrap(), vec!["second".to_string()]);
    }

    #[actix_web::test]
    async fn test_submit_for_missing_user_is_unauthenticated() {
        let service = SecretService::new(Arc::new(InMemoryUserStore::new()));

        let result = service.submit_secret("0123456789abcdef01234567", &request("x")).await;

        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }

    #[actix_web::test]
    async fn test_blank_secret_is_rejected() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = SecretService::new(store.clone());
        let user = store.create(User::new_local("alice".into(), "h".into())).await.unwrap();

        let result = service.submit_secret(&user.id_string(), &request("   ")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(service.list_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_padded_secret_at_length_limit_is_accepted() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = SecretService::new(store.clone());
        let user = store.create(User::new_local("alice".into(), "h".into())).await.unwrap();
        let secret = "x".repeat(MAX_SECRET_LENGTH);

        service
            .submit_secret(&user.id_string(), &request(&format!("  {}  ", secret)))
            .await
            .unwrap();

        assert_eq!(service.list_secrets().await.unwrap(), vec![secret]);
    }
}
