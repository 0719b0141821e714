//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, 세션 관리 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 사용자명/패스워드 기반 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **Facebook OAuth 2.0**: Facebook 계정을 통한 소셜 로그인
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export SESSION_SECRET="long-random-cookie-signing-secret"
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export FACEBOOK_CLIENT_ID="your-facebook-app-id"
//! export FACEBOOK_CLIENT_SECRET="your-facebook-app-secret"
//! ```
//!
//! ### 선택적 환경 변수
//! ```bash
//! export OAUTH_CALLBACK_BASE_URL="http://localhost:3000"
//! export SESSION_TTL_SECONDS="86400"
//! ```

use serde::{Deserialize, Serialize};
use crate::errors::{AppError, AppResult};
use super::{require_var, var_or, EnvLookup};

/// 외부 OAuth 신원 제공자
///
/// 각 프로바이더의 사용자 ID는 해당 프로바이더 범위에서만 유일합니다.
/// 같은 ID 문자열이라도 프로바이더가 다르면 서로 다른 신원입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProvider {
    Google,
    Facebook,
}

impl IdentityProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityProvider::Google => "google",
            IdentityProvider::Facebook => "facebook",
        }
    }

    /// 사용자 문서에서 이 프로바이더의 ID를 저장하는 필드명
    pub fn id_field(&self) -> &'static str {
        match self {
            IdentityProvider::Google => "googleId",
            IdentityProvider::Facebook => "facebookId",
        }
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            IdentityProvider::Google => "GOOGLE",
            IdentityProvider::Facebook => "FACEBOOK",
        }
    }
}

/// OAuth 2.0 클라이언트 등록 정보
///
/// `client_secret`은 로그에 출력하지 마세요. `Debug` 구현도 값을 가립니다.
#[derive(Clone)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    /// 인증 완료 후 프로바이더가 리디렉션할 URL
    pub callback_url: String,
}

impl OAuthClientConfig {
    /// `{PREFIX}_CLIENT_ID`, `{PREFIX}_CLIENT_SECRET`을 읽고
    /// 콜백 URL을 `{base}/auth/{provider}/secrets`로 구성합니다.
    pub fn from_lookup(
        lookup: &EnvLookup,
        provider: IdentityProvider,
        callback_base_url: &str,
    ) -> AppResult<Self> {
        let prefix = provider.env_prefix();

        Ok(Self {
            client_id: require_var(lookup, &format!("{}_CLIENT_ID", prefix))?,
            client_secret: require_var(lookup, &format!("{}_CLIENT_SECRET", prefix))?,
            callback_url: format!(
                "{}/auth/{}/secrets",
                callback_base_url.trim_end_matches('/'),
                provider.as_str()
            ),
        })
    }
}

impl std::fmt::Debug for OAuthClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

/// 세션 쿠키 및 세션 수명 설정
#[derive(Clone)]
pub struct SessionConfig {
    /// 쿠키 서명 비밀값
    pub secret: String,
    /// 세션 유효 시간 (초)
    pub ttl_seconds: u64,
    /// HTTPS 전용 쿠키 여부 (운영 환경에서만 true)
    pub secure_cookies: bool,
}

impl SessionConfig {
    pub fn from_lookup(lookup: &EnvLookup, secure_cookies: bool) -> AppResult<Self> {
        let secret = require_var(lookup, "SESSION_SECRET")?;
        if secret.len() < 32 {
            log::warn!("SESSION_SECRET이 32바이트보다 짧습니다 (운영 환경에서는 안전하지 않음)");
        }

        let ttl_seconds = var_or(lookup, "SESSION_TTL_SECONDS", "86400")
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("SESSION_TTL_SECONDS: {}", e)))?;

        if ttl_seconds == 0 {
            return Err(AppError::ConfigError("SESSION_TTL_SECONDS must be positive".to_string()));
        }

        Ok(Self {
            secret,
            ttl_seconds,
            secure_cookies,
        })
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}
