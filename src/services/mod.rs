//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트 객체를 주입받아 생성되며,
//! [`AppContext`](crate::core::context::AppContext)가 한 번 구성해 모든 핸들러에 공유합니다.

pub mod users;
pub mod auth;
