//! # Facebook Login 서비스
//!
//! | 용도 | 엔드포인트 |
//! |------|------------|
//! | **Dialog** | `https://www.facebook.com/v19.0/dialog/oauth` |
//! | **Token Exchange** | `https://graph.facebook.com/v19.0/oauth/access_token` (GET) |
//! | **Profile** | `https://graph.facebook.com/me?fields=id,name` |

use async_trait::async_trait;
use log::debug;

use crate::config::{IdentityProvider, OAuthClientConfig};
use crate::domain::dto::OAuthTokenResponse;
use crate::domain::models::oauth::FacebookUserInfo;
use crate::errors::AppResult;
use super::{build_url, ensure_success, upstream_error, OAuthProvider};

const DIALOG_URI: &str = "https://www.facebook.com/v19.0/dialog/oauth";
const TOKEN_URI: &str = "https://graph.facebook.com/v19.0/oauth/access_token";
const PROFILE_URI: &str = "https://graph.facebook.com/me";

pub struct FacebookAuthService {
    config: OAuthClientConfig,
    http: reqwest::Client,
}

impl FacebookAuthService {
    pub fn new(config: OAuthClientConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<OAuthTokenResponse> {
        let response = self.http
            .get(TOKEN_URI)
            .query(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.callback_url.as_str()),
                ("code", auth_code),
            ])
            .send()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Facebook, "토큰 요청", e))?;

        ensure_success(response, IdentityProvider::Facebook, "토큰 교환")
            .await?
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Facebook, "토큰 응답 파싱", e))
    }

    async fn get_profile(&self, access_token: &str) -> AppResult<FacebookUserInfo> {
        let response = self.http
            .get(PROFILE_URI)
            .query(&[("fields", "id,name")])
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Facebook, "프로필 요청", e))?;

        ensure_success(response, IdentityProvider::Facebook, "프로필 조회")
            .await?
            .json::<FacebookUserInfo>()
            .await
            .map_err(|e| upstream_error(IdentityProvider::Facebook, "프로필 파싱", e))
    }
}

#[async_trait]
impl OAuthProvider for FacebookAuthService {
    fn provider(&self) -> IdentityProvider {
        IdentityProvider::Facebook
    }

    fn authorization_url(&self, state: &str) -> String {
        build_url(DIALOG_URI, &[
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("response_type", "code"),
            ("state", state),
        ])
    }

    async fn fetch_provider_id(&self, code: &str) -> AppResult<String> {
        let token = self.exchange_code_for_token(code).await?;
        let profile = self.get_profile(&token.access_token).await?;

        debug!("Facebook 프로필 조회: {} ({:?})", profile.id, profile.name);
        Ok(profile.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_dialog_url() {
        let config = AppConfig::for_tests();
        let service = FacebookAuthService::new(config.facebook, reqwest::Client::new());

        let url = service.authorization_url("xyz");

        assert!(url.starts_with(DIALOG_URI));
        assert!(url.contains("client_id=facebook-client-id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Ffacebook%2Fsecrets"));
        assert!(url.contains("state=xyz"));
        assert!(!url.contains("client_secret"));
    }
}
