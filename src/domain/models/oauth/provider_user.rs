//! # OAuth 프로바이더 사용자 정보 모델
//!
//! 각 프로바이더의 사용자 정보 API 응답 중 신원 확인에 필요한 필드만
//! 매핑합니다. 이메일이나 프로필 사진 등은 저장하지 않습니다.

use serde::Deserialize;

/// Google `oauth2/v2/userinfo` 응답
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Facebook Graph API `/me` 응답
#[derive(Debug, Deserialize)]
pub struct FacebookUserInfo {
    /// 앱 범위 사용자 ID
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_userinfo_ignores_extra_fields() {
        let json = r#"{"id":"1092","name":"Alice","picture":"https://x/y.png","verified_email":true}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.id, "1092");
        assert_eq!(info.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_facebook_me_with_only_id() {
        let info: FacebookUserInfo = serde_json::from_str(r#"{"id":"77"}"#).unwrap();

        assert_eq!(info.id, "77");
        assert!(info.name.is_none());
    }
}
