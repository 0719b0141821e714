//! 데이터 전송 객체 (DTO) 모듈
//!
//! HTTP 폼 입력과 외부 OAuth API 응답을 표현합니다.
//! 폼 DTO는 `validator`로 검증한 뒤 서비스 계층에 전달됩니다.

pub mod auth_request;
pub mod secret_request;
pub mod oauth_response;

pub use auth_request::*;
pub use secret_request::*;
pub use oauth_response::*;
