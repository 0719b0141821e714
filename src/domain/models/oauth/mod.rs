//! OAuth 프로바이더 응답 모델

pub mod provider_user;

pub use provider_user::{FacebookUserInfo, GoogleUserInfo};
