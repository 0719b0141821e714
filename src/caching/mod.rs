//! 캐싱 계층 모듈
//!
//! Redis 연결과 JSON 기반 직렬화를 제공합니다.
//! 서버 측 세션 레코드가 이 계층을 통해 TTL과 함께 저장됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

pub use self::redis::RedisClient;
