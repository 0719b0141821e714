//! 메모리 기반 세션 저장소 (테스트용)

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::models::auth::SessionRecord;
use crate::errors::{AppError, AppResult};
use super::SessionStore;

#[derive(Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, (SessionRecord, Instant)>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, (SessionRecord, Instant)>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::StoreUnavailable("in-memory session store poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.lock()?.insert(key.to_string(), (record.clone(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let mut entries = self.lock()?;

        match entries.get(key) {
            Some((record, expires_at)) if *expires_at > Instant::now() => Ok(Some(record.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SessionRecord {
        SessionRecord { user_id: "u1".to_string(), created_at: 0 }
    }

    #[actix_web::test]
    async fn test_expired_entry_is_absent() {
        let store = InMemorySessionStore::new();
        store.put("k", &record(), 0).await.unwrap();

        assert!(store.get("k").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_put_get_delete() {
        let store = InMemorySessionStore::new();
        store.put("k", &record(), 60).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(record()));

        store.delete("k").await.unwrap();
        store.delete("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }
}
