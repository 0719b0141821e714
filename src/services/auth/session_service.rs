//! # 세션 관리 서비스
//!
//! 인증에 성공한 사용자에게 불투명한 세션 토큰을 발급하고,
//! 이후 요청에서 토큰을 사용자 ID로 되돌립니다.
//!
//! ## 토큰과 저장 키
//!
//! ```text
//! token = base64url(uuid_v4 || uuid_v4)        // 256 bits, 쿠키로 전달
//! key   = hex(sha256(token))                   // 세션 저장소 키
//! ```
//!
//! 저장소에는 토큰 원문이 남지 않습니다.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use log::debug;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::models::auth::{SessionRecord, SessionUser};
use crate::errors::AppResult;
use crate::repositories::sessions::SessionStore;

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    ttl_seconds: u64,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, ttl_seconds: u64) -> Self {
        Self { store, ttl_seconds }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// 새 세션을 만들고 클라이언트에 전달할 토큰을 반환합니다.
    pub async fn create(&self, user_id: &str) -> AppResult<String> {
        let token = generate_token();
        let record = SessionRecord {
            user_id: user_id.to_string(),
            created_at: chrono::Utc::now().timestamp(),
        };

        self.store
            .put(&storage_key(&token), &record, self.ttl_seconds)
            .await?;

        debug!("세션 생성: 사용자 ID {}", user_id);
        Ok(token)
    }

    /// 토큰에 해당하는 세션 사용자
    ///
    /// 알 수 없거나 만료된 토큰은 `Ok(None)`, 저장소 장애는 `Err`입니다.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<SessionUser>> {
        if token.is_empty() {
            return Ok(None);
        }

        let record = self.store.get(&storage_key(token)).await?;

        Ok(record.map(|r| SessionUser { user_id: r.user_id }))
    }

    /// 세션 삭제. 이미 삭제된 토큰이어도 성공합니다.
    pub async fn destroy(&self, token: &str) -> AppResult<()> {
        self.store.delete(&storage_key(token)).await
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(Uuid::new_v4().as_bytes());
    bytes[16..].copy_from_slice(Uuid::new_v4().as_bytes());
    URL_SAFE_NO_PAD.encode(bytes)
}

fn storage_key(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::sessions::InMemorySessionStore;

    fn service() -> (SessionService, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        (SessionService::new(store.clone(), 60), store)
    }

    #[test]
    fn test_tokens_are_unique_and_url_safe() {
        let a = generate_token();
        let b = generate_token();

        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_storage_key_is_digest_not_token() {
        let key = storage_key("abc");

        assert_eq!(key.len(), 64);
        assert_ne!(key, "abc");
        assert_eq!(key, storage_key("abc"));
    }

    #[actix_web::test]
    async fn test_create_then_resolve() {
        let (sessions, _) = service();

        let token = sessions.create("user-1").await.unwrap();
        let resolved = sessions.resolve(&token).await.unwrap();

        assert_eq!(resolved, Some(SessionUser { user_id: "user-1".to_string() }));
    }

    #[actix_web::test]
    async fn test_unknown_token_is_anonymous() {
        let (sessions, _) = service();

        assert!(sessions.resolve("not-a-token").await.unwrap().is_none());
        assert!(sessions.resolve("").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_destroy_is_idempotent() {
        let (sessions, store) = service();
        let token = sessions.create("user-1").await.unwrap();

        sessions.destroy(&token).await.unwrap();
        assert!(sessions.resolve(&token).await.unwrap().is_none());

        sessions.destroy(&token).await.unwrap();
        assert!(store.is_empty());
    }
}
