//! Redis 기반 세션 저장소
//!
//! 키 패턴: `session:{sha256(token)}`

use async_trait::async_trait;

use crate::caching::RedisClient;
use crate::domain::models::auth::SessionRecord;
use crate::errors::AppResult;
use super::SessionStore;

const KEY_PREFIX: &str = "session:";

#[derive(Clone)]
pub struct RedisSessionStore {
    redis: RedisClient,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn redis_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&Self::redis_key(key), record, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let record = self.redis.get::<SessionRecord>(&Self::redis_key(key)).await?;
        Ok(record)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.redis.del(&Self::redis_key(key)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_key_prefix() {
        assert_eq!(RedisSessionStore::redis_key("abc"), "session:abc");
    }
}
