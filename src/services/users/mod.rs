//! 사용자 관련 서비스
//!
//! - [`CredentialService`] - 로컬 회원가입, 비밀번호 검증
//! - [`SecretService`] - 비밀 제출, 전체 목록

pub mod credential_service;
pub mod secret_service;

pub use credential_service::CredentialService;
pub use secret_service::SecretService;
