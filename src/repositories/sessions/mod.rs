//! 세션 저장소 모듈
//!
//! 세션 토큰의 다이제스트를 키로 [`SessionRecord`]를 보관합니다.
//! 만료는 저장소가 TTL로 처리합니다.

pub mod redis_session_store;
pub mod memory_session_store;

pub use redis_session_store::RedisSessionStore;
pub use memory_session_store::InMemorySessionStore;

use async_trait::async_trait;

use crate::domain::models::auth::SessionRecord;
use crate::errors::AppResult;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 레코드 저장 (같은 키가 있으면 덮어씀)
    async fn put(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()>;

    /// 없거나 만료된 키는 `Ok(None)`
    async fn get(&self, key: &str) -> AppResult<Option<SessionRecord>>;

    /// 없는 키를 삭제해도 성공
    async fn delete(&self, key: &str) -> AppResult<()>;
}
