//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 서명된 세션 쿠키 검증
//! - 세션 저장소 조회 후 [`SessionUser`](crate::domain::models::auth::SessionUser)를
//!   request extension에 저장
//! - 미인증 요청은 `/login`으로 리다이렉트
//!
//! 핸들러에서는 `SessionUser` 추출자로 인증된 사용자를 받습니다.
//!
//! ```rust,ignore
//! async fn submit_secret(user: SessionUser, form: web::Form<SubmitSecretRequest>) -> ... {
//!     // user.user_id 사용
//! }
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{is_authenticated, session_from_request, AuthMiddleware};
