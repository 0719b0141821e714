//! OAuth 응답 DTO 모듈
//!
//! Authorization Code Grant의 토큰 교환 응답을 정의합니다.
//! Google과 Facebook 모두 `access_token` 필드를 공통으로 반환합니다.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_token_response() {
        let json = r#"{"access_token":"ya29.a0","token_type":"Bearer","expires_in":3599,"scope":"profile"}"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "ya29.a0");
        assert_eq!(token.expires_in, Some(3599));
    }

    #[test]
    fn test_facebook_token_response() {
        let json = r#"{"access_token":"EAAB","token_type":"bearer"}"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.token_type.as_deref(), Some("bearer"));
        assert!(token.expires_in.is_none());
    }
}
