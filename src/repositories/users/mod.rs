//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`] 트레이트가 사용자 저장소의 계약을 정의하고,
//! 운영 환경은 [`MongoUserRepository`], 테스트는 [`InMemoryUserStore`]를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database));
//! let user = store.find_or_create_by_provider(IdentityProvider::Google, "G123").await?;
//! ```

pub mod user_repo;
pub mod memory_user_store;

pub use user_repo::MongoUserRepository;
pub use memory_user_store::InMemoryUserStore;

use async_trait::async_trait;

use crate::config::IdentityProvider;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 사용자 저장소 계약
///
/// 모든 변경은 단일 레코드 원자 연산입니다. 저장소 접근 실패는
/// `AppError::StoreUnavailable`로 반환되며 "없음"(`Ok(None)`)과 구분됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 레코드 삽입
    ///
    /// 사용자명 유니크 제약 위반 시 `AppError::DuplicateUsername`.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 프로바이더 ID로 조회하고 없으면 원자적으로 생성합니다.
    ///
    /// 동시에 호출되어도 같은 프로바이더 ID를 가진 레코드는 하나만 존재합니다.
    async fn find_or_create_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> AppResult<User>;

    /// 사용자의 비밀을 덮어씁니다. 사용자가 없으면 `Ok(false)`.
    async fn set_secret(&self, id: &str, secret: &str) -> AppResult<bool>;

    /// 비밀이 있는 모든 사용자의 비밀 목록 (작성자 정보 없음)
    async fn list_secrets(&self) -> AppResult<Vec<String>>;
}
