//! 메모리 기반 사용자 저장소
//!
//! 테스트와 로컬 데모용입니다. 모든 연산은 하나의 잠금 안에서 수행되므로
//! check-and-insert가 원자적이며, 잠금은 `.await` 경계를 넘지 않습니다.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::DateTime;

use crate::config::IdentityProvider;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use super::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::StoreUnavailable("in-memory user store poisoned".to_string()))
    }

    /// 주어진 프로바이더 ID를 가진 레코드 수
    #[cfg(test)]
    pub fn count_by_provider(&self, provider: IdentityProvider, provider_id: &str) -> usize {
        self.users
            .lock()
            .map(|users| {
                users
                    .iter()
                    .filter(|u| u.provider_id(provider) == Some(provider_id))
                    .count()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.lock()?;
        Ok(users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.lock()?;

        if let Some(username) = user.username.as_deref() {
            if users.iter().any(|u| u.username.as_deref() == Some(username)) {
                return Err(AppError::DuplicateUsername);
            }
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_or_create_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> AppResult<User> {
        let mut users = self.lock()?;

        if let Some(existing) = users.iter().find(|u| u.provider_id(provider) == Some(provider_id)) {
            return Ok(existing.clone());
        }

        let user = User::new_oauth(provider, provider_id.to_string());
        users.push(user.clone());
        Ok(user)
    }

    async fn set_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let mut users = self.lock()?;

        match users.iter_mut().find(|u| u.id_string() == id) {
            Some(user) => {
                user.secret = Some(secret.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_secrets(&self) -> AppResult<Vec<String>> {
        let users = self.lock()?;
        Ok(users.iter().filter_map(|u| u.secret.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_rejects_duplicate_username() {
        let store = InMemoryUserStore::new();
        store.create(User::new_local("alice".into(), "h1".into())).await.unwrap();

        let result = store.create(User::new_local("alice".into(), "h2".into())).await;

        assert!(matches!(result, Err(AppError::DuplicateUsername)));
    }

    #[actix_web::test]
    async fn test_oauth_users_do_not_collide_on_username() {
        let store = InMemoryUserStore::new();
        store.create(User::new_oauth(IdentityProvider::Google, "g1".into())).await.unwrap();
        store.create(User::new_oauth(IdentityProvider::Google, "g2".into())).await.unwrap();

        assert_eq!(store.count_by_provider(IdentityProvider::Google, "g2"), 1);
    }

    #[actix_web::test]
    async fn test_set_secret_for_unknown_user() {
        let store = InMemoryUserStore::new();

        let updated = store.set_secret("0123456789abcdef01234567", "hi").await.unwrap();

        assert!(!updated);
        assert!(store.list_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_list_secrets_skips_users_without_secret() {
        let store = InMemoryUserStore::new();
        let a = store.create(User::new_local("a".into(), "h".into())).await.unwrap();
        store.create(User::new_local("b".into(), "h".into())).await.unwrap();

        store.set_secret(&a.id_string(), "first").await.unwrap();
        store.set_secret(&a.id_string(), "second").await.unwrap();

        assert_eq!(store.list_secrets().await.unwrap(), vec!["second".to_string()]);
    }
}
