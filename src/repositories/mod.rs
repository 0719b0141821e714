//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소마다 트레이트와 구현체를 함께 둡니다.
//!
//! - [`users`] - 사용자 레코드 (MongoDB / 메모리)
//! - [`sessions`] - 서버 측 세션 (Redis / 메모리)

pub mod users;
pub mod sessions;

pub use users::{InMemoryUserStore, MongoUserRepository, UserStore};
pub use sessions::{InMemorySessionStore, RedisSessionStore, SessionStore};
