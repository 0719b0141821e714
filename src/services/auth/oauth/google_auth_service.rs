//! # Google OAuth 2.0 인증 서비스
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST (form) |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET (bearer) |
//!
//! 필요한 스코프는 `profile` 하나입니다. 이메일은 요청하지 않습니다.

use async_trait::async_trait;
use log::debug;

use crate::config::{IdentityProvider, OAuthClientConfig};
use crate::domain::dto::OAuthTokenResponse;
use crate::domain::models::oauth::GoogleUserInfo;
use crate::errors::AppResult;
use super::{build_url, ensure_success, upstream_error, OAuthProvider};

const AUTH_URI: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

pub struct GoogleAuthService {
    config: OAuthClientConfig,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(config: OAuthClientConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("code", auth_code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(TOKEN_URI)
            .form(&params)
            .send()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Google, "토큰 요청", e))?;

        ensure_success(response, IdentityProvider::Google, "토큰 교환")
            .await?
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Google, "토큰 응답 파싱", e))
    }

    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self.http
            .get(USERINFO_URI)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Google, "사용자 정보 요청", e))?;

        ensure_success(response, IdentityProvider::Google, "사용자 정보 조회")
            .await?
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Google, "사용자 정보 파싱", e))
    }
}

#[async_trait]
impl OAuthProvider for GoogleAuthService {
    fn provider(&self) -> IdentityProvider {
        IdentityProvider::Google
    }

    fn authorization_url(&self, state: &str) -> String {
        build_url(AUTH_URI, &[
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("scope", "profile"),
            ("response_type", "code"),
            ("state", state),
        ])
    }

    async fn fetch_provider_id(&self, code: &str) -> AppResult<String> {
        let token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&token.access_token).await?;

        debug!("Google 사용자 정보 조회: {} ({:?})", user_info.id, user_info.name);
        Ok(user_info.id)
    }
}
