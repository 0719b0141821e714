//! # OAuth 2.0 프로바이더
//!
//! Authorization Code Flow를 프로바이더별로 구현합니다.
//!
//! ```text
//! GET /auth/{provider}            → state 쿠키 설정, 302 → 프로바이더 동의 화면
//! GET /auth/{provider}/secrets    → state 비교, code → access_token → 사용자 ID
//! ```
//!
//! 프로바이더 응답이 무엇이든 실패는 `AppError::OAuthUpstreamFailure`로 모입니다.

pub mod google_auth_service;
pub mod facebook_auth_service;

pub use google_auth_service::GoogleAuthService;
pub use facebook_auth_service::FacebookAuthService;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use uuid::Uuid;

use crate::config::IdentityProvider;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    fn provider(&self) -> IdentityProvider;

    /// 사용자를 보낼 프로바이더 인증 URL
    fn authorization_url(&self, state: &str) -> String;

    /// Authorization Code를 교환하고 프로바이더 범위의 사용자 ID를 조회합니다.
    async fn fetch_provider_id(&self, code: &str) -> AppResult<String>;
}

/// CSRF 방지용 state 값 (128 bits)
pub fn generate_state() -> String {
    URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
}

pub(crate) fn build_url(base: &str, params: &[(&str, &str)]) -> String {
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query_string)
}

/// 프로바이더 응답 상태 코드를 확인하고 실패 시 본문을 담아 에러로 변환합니다.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
    provider: IdentityProvider,
    step: &str,
) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    Err(AppError::OAuthUpstreamFailure(format!(
        "{} {} 실패 ({}): {}",
        provider.as_str(),
        step,
        status,
        error_text
    )))
}

pub(crate) fn upstream_error(provider: IdentityProvider, step: &str, e: reqwest::Error) -> AppError {
    AppError::OAuthUpstreamFailure(format!("{} {} 실패: {}", provider.as_str(), step, e))
}

#[cfg(test)]
pub mod stub {
    //! 네트워크 없이 콜백 흐름을 검증하기 위한 가짜 프로바이더

    use super::*;

    pub const VALID_CODE: &str = "valid-code";

    pub struct StubOAuthProvider {
        provider: IdentityProvider,
        provider_user_id: String,
    }

    impl StubOAuthProvider {
        pub fn new(provider: IdentityProvider, provider_user_id: &str) -> Self {
            Self {
                provider,
                provider_user_id: provider_user_id.to_string(),
            }
        }
    }

    #[async_trait]
    impl OAuthProvider for StubOAuthProvider {
        fn provider(&self) -> IdentityProvider {
            self.provider
        }

        fn authorization_url(&self, state: &str) -> String {
            build_url(
                &format!("https://{}.example/oauth", self.provider.as_str()),
                &[("state", state)],
            )
        }

        async fn fetch_provider_id(&self, code: &str) -> AppResult<String> {
            if code == VALID_CODE {
                Ok(self.provider_user_id.clone())
            } else {
                Err(AppError::OAuthUpstreamFailure("invalid_grant".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url("https://auth.example/o", &[("redirect_uri", "http://a/b?c=d"), ("scope", "profile")]);

        assert_eq!(url, "https://auth.example/o?redirect_uri=http%3A%2F%2Fa%2Fb%3Fc%3Dd&scope=profile");
    }

    #[test]
    fn test_generate_state_is_random() {
        let a = generate_state();

        assert_eq!(a.len(), 22);
        assert_ne!(a, generate_state());
    }
}
