//! OAuth 신원 조정
//!
//! 프로바이더가 돌려준 사용자 ID를 내부 사용자 레코드로 연결합니다.
//! 처음 보는 ID는 새 레코드가 되며, 기존 로컬 계정과 자동 연동하지 않습니다.

use std::sync::Arc;

use log::info;

use crate::config::IdentityProvider;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

pub struct IdentityReconciler {
    users: Arc<dyn UserStore>,
}

impl IdentityReconciler {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 프로바이더 ID에 해당하는 사용자를 찾거나 생성합니다.
    ///
    /// 같은 입력으로 몇 번을 호출해도 같은 레코드를 돌려줍니다.
    pub async fn find_or_create(&self, provider: IdentityProvider, provider_id: &str) -> AppResult<User> {
        if provider_id.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} user id must not be empty",
                provider.as_str()
            )));
        }

        let user = self.users
            .find_or_create_by_provider(provider, provider_id)
            .await?;

        info!("{} 로그인: 사용자 ID {}", provider.as_str(), user.id_string());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserStore;
    use futures_util::future::join;

    fn reconciler() -> (IdentityReconciler, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        (IdentityReconciler::new(store.clone()), store)
    }

    #[actix_web::test]
    async fn test_repeated_calls_return_same_record() {
        let (reconciler, store) = reconciler();

        let first = reconciler.find_or_create(IdentityProvider::Google, "X").await.unwrap();
        let second = reconciler.find_or_create(IdentityProvider::Google, "X").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.count_by_provider(IdentityProvider::Google, "X"), 1);
    }

    #[actix_web::test]
    async fn test_same_id_on_different_providers_are_distinct() {
        let (reconciler, _) = reconciler();

        let google = reconciler.find_or_create(IdentityProvider::Google, "X").await.unwrap();
        let facebook = reconciler.find_or_create(IdentityProvider::Facebook, "X").await.unwrap();

        assert_ne!(google.id, facebook.id);
        assert_eq!(facebook.google_id, None);
    }

    #[actix_web::test]
    async fn test_concurrent_find_or_create_yields_one_record() {
        let (reconciler, store) = reconciler();

        let (a, b) = join(
            reconciler.find_or_create(IdentityProvider::Google, "G123"),
            reconciler.find_or_create(IdentityProvider::Google, "G123"),
        )
        .await;

        assert_eq!(a.unwrap().id, b.unwrap().id);
        assert_eq!(store.count_by_provider(IdentityProvider::Google, "G123"), 1);
    }

    #[actix_web::test]
    async fn test_empty_provider_id_is_rejected() {
        let (reconciler, _) = reconciler();

        let result = reconciler.find_or_create(IdentityProvider::Facebook, "  ").await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
