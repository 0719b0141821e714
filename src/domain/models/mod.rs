//! 도메인 모델 모듈
//!
//! 영속화되지 않는 값 객체들을 정의합니다.
//!
//! - [`auth`] - 세션에서 확인된 사용자 신원과 세션 레코드
//! - [`oauth`] - OAuth 프로바이더 사용자 정보

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
