//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 한 번 읽어 [`AppConfig`]로 구성하고,
//! 이후에는 이 값만 사용합니다. 설정 접근자는 패닉하지 않으며,
//! 필수 값이 없으면 [`AppError::ConfigError`]를 반환합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - 세션, OAuth 프로바이더 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="3000"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="userDB"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 세션
//! export SESSION_SECRET="long-random-cookie-signing-secret"
//!
//! # OAuth
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export FACEBOOK_CLIENT_ID="..."
//! export FACEBOOK_CLIENT_SECRET="..."
//! export OAUTH_CALLBACK_BASE_URL="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::errors::{AppError, AppResult};

/// 환경 변수 조회 함수
///
/// 운영 코드는 `std::env::var`를, 테스트는 고정된 맵을 사용합니다.
pub type EnvLookup = dyn Fn(&str) -> Option<String>;

/// 프로세스 환경 변수 조회
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub(crate) fn var_or(lookup: &EnvLookup, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn require_var(lookup: &EnvLookup, key: &str) -> AppResult<String> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

/// 애플리케이션 전체 설정
///
/// `main`에서 한 번 생성되어 [`AppContext`](crate::core::context::AppContext)
/// 구성에 사용됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub session: SessionConfig,
    pub google: OAuthClientConfig,
    pub facebook: OAuthClientConfig,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: &EnvLookup) -> AppResult<Self> {
        let environment = Environment::from_lookup(lookup);
        let callback_base_url = var_or(lookup, "OAUTH_CALLBACK_BASE_URL", "http://localhost:3000");
        let secure_cookies = environment == Environment::Production;

        Ok(Self {
            bcrypt_cost: PasswordConfig::bcrypt_cost(lookup, &environment),
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            rate_limit: RateLimitConfig::from_lookup(lookup),
            session: SessionConfig::from_lookup(lookup, secure_cookies)?,
            google: OAuthClientConfig::from_lookup(lookup, IdentityProvider::Google, &callback_base_url)?,
            facebook: OAuthClientConfig::from_lookup(lookup, IdentityProvider::Facebook, &callback_base_url)?,
            environment,
        })
    }

    /// 테스트용 설정
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let callback_base_url = "http://localhost:3000";
        let oauth = |provider: IdentityProvider| OAuthClientConfig {
            client_id: format!("{}-client-id", provider.as_str()),
            client_secret: format!("{}-client-secret", provider.as_str()),
            callback_url: format!("{}/auth/{}/secrets", callback_base_url, provider.as_str()),
        };

        Self {
            environment: Environment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                mongodb_uri: "mongodb://localhost:27017".to_string(),
                database_name: "userDB_test".to_string(),
                redis_url: "redis://localhost:6379".to_string(),
            },
            rate_limit: RateLimitConfig {
                per_second: 100,
                burst_size: 200,
            },
            session: SessionConfig {
                secret: "test-session-secret-test-session-secret".to_string(),
                ttl_seconds: 3600,
                secure_cookies: false,
            },
            google: oauth(IdentityProvider::Google),
            facebook: oauth(IdentityProvider::Facebook),
            bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(&Environment::Test),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<String, String> {
        [
            ("ENVIRONMENT", "development"),
            ("SESSION_SECRET", "0123456789abcdef0123456789abcdef"),
            ("GOOGLE_CLIENT_ID", "g-id"),
            ("GOOGLE_CLIENT_SECRET", "g-secret"),
            ("FACEBOOK_CLIENT_ID", "f-id"),
            ("FACEBOOK_CLIENT_SECRET", "f-secret"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_app_config_from_complete_env() {
        let env = full_env();
        let config = AppConfig::from_lookup(&move |key: &str| env.get(key).cloned()).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bcrypt_cost, 4);
        assert!(!config.session.secure_cookies);
        assert_eq!(config.google.callback_url, "http://localhost:3000/auth/google/secrets");
        assert_eq!(config.facebook.callback_url, "http://localhost:3000/auth/facebook/secrets");
    }

    #[test]
    fn test_app_config_requires_session_secret() {
        let mut env = full_env();
        env.remove("SESSION_SECRET");

        let result = AppConfig::from_lookup(&move |key: &str| env.get(key).cloned());

        assert!(matches!(result, Err(AppError::ConfigError(ref msg)) if msg.contains("SESSION_SECRET")));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut env = full_env();
        env.insert("GOOGLE_CLIENT_ID".to_string(), "   ".to_string());

        let result = AppConfig::from_lookup(&move |key: &str| env.get(key).cloned());

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
