//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("alice".to_string(), password_hash);
//!
//! // OAuth 사용자 생성
//! let oauth_user = User::new_oauth(IdentityProvider::Google, "google_user_id_123".to_string());
//! ```

pub mod user;

pub use user::User;
