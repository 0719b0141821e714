//! User Entity Implementation
//!
//! 로컬 인증과 OAuth 인증을 모두 표현하는 단일 사용자 문서입니다.
//! 한 문서는 {username + passwordHash, googleId, facebookId} 중
//! 하나 이상을 가지며, 신원 간 자동 연동은 하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::IdentityProvider;

/// 사용자 엔티티
///
/// MongoDB `users` 컬렉션의 문서와 1:1로 대응합니다.
/// 필드명은 기존 컬렉션과 호환되도록 camelCase로 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 로컬 계정 사용자명 (로컬 계정 간 unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt 해시 (로컬 계정에만 존재)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google 사용자 ID (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// Facebook 사용자 ID (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 사용자가 제출한 비밀 (재제출 시 덮어씀)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// 생성 시간
    #[serde(rename = "created_at")]
    pub created_at: DateTime,
    /// 수정 시간
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (사용자명/패스워드 해시)
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 해당 프로바이더 ID 필드만 채워지고 나머지는 비어 있습니다.
    pub fn new_oauth(provider: IdentityProvider, provider_id: String) -> Self {
        let now = DateTime::now();
        let (google_id, facebook_id) = match provider {
            IdentityProvider::Google => (Some(provider_id), None),
            IdentityProvider::Facebook => (None, Some(provider_id)),
        };

        Self {
            id: ObjectId::new(),
            username: None,
            password_hash: None,
            google_id,
            facebook_id,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.username.is_some() && self.password_hash.is_some()
    }

    /// 주어진 프로바이더에서의 사용자 ID
    pub fn provider_id(&self, provider: IdentityProvider) -> Option<&str> {
        match provider {
            IdentityProvider::Google => self.google_id.as_deref(),
            IdentityProvider::Facebook => self.facebook_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_oauth_sets_only_that_provider() {
        let user = User::new_oauth(IdentityProvider::Facebook, "fb-42".to_string());

        assert_eq!(user.provider_id(IdentityProvider::Facebook), Some("fb-42"));
        assert_eq!(user.provider_id(IdentityProvider::Google), None);
        assert!(user.username.is_none());
        assert!(user.secret.is_none());
        assert!(!user.can_authenticate_with_password());
    }

    #[test]
    fn test_document_field_names() {
        let mut user = User::new_oauth(IdentityProvider::Google, "g-1".to_string());
        user.secret = Some("hi".to_string());

        let doc = mongodb::bson::to_document(&user).unwrap();

        assert!(doc.contains_key("_id"));
        assert_eq!(doc.get_str("googleId").unwrap(), "g-1");
        assert_eq!(doc.get_str("secret").unwrap(), "hi");
        assert!(!doc.contains_key("facebookId"));
        assert!(!doc.contains_key("passwordHash"));
    }

    #[test]
    fn test_local_user_can_use_password() {
        let user = User::new_local("alice".to_string(), "$2b$04$hash".to_string());

        assert!(user.can_authenticate_with_password());
        assert_eq!(user.id_string().len(), 24);
    }
}
