//! 인증 관련 서비스
//!
//! - [`SessionService`] - 서버 측 세션 발급/조회/삭제
//! - [`IdentityReconciler`] - OAuth 신원 → 사용자 레코드
//! - [`CookieSigner`] - 세션/state 쿠키 서명
//! - [`oauth`] - Google, Facebook 프로바이더

pub mod cookie_signer;
pub mod identity_reconciler;
pub mod session_service;
pub mod oauth;

pub use cookie_signer::*;
pub use identity_reconciler::IdentityReconciler;
pub use session_service::SessionService;
pub use oauth::{FacebookAuthService, GoogleAuthService, OAuthProvider};
