//! 서명 쿠키 유틸리티
//!
//! `SESSION_SECRET`에서 HMAC 키를 유도해 쿠키 값을 서명하고 검증합니다.
//! 변조되었거나 다른 키로 서명된 쿠키는 없는 것으로 취급합니다.

use actix_web::cookie::{time::Duration, Cookie, CookieJar, Key, SameSite};
use actix_web::HttpRequest;
use sha2::{Digest, Sha512};

use crate::errors::{AppError, AppResult};

/// 세션 토큰 쿠키 이름
pub const SESSION_COOKIE: &str = "secrets_sid";
/// OAuth state 쿠키 이름
pub const OAUTH_STATE_COOKIE: &str = "secrets_oauth_state";
/// OAuth state 쿠키 유효 시간 (초)
pub const OAUTH_STATE_TTL_SECONDS: i64 = 600;

#[derive(Clone)]
pub struct CookieSigner {
    key: Key,
    secure: bool,
}

impl CookieSigner {
    /// 임의 길이의 비밀값을 SHA-512로 늘려 64바이트 키를 만듭니다.
    pub fn new(secret: &str, secure: bool) -> Self {
        let digest = Sha512::digest(secret.as_bytes());
        Self {
            key: Key::from(digest.as_slice()),
            secure,
        }
    }

    /// HttpOnly, SameSite=Lax 서명 쿠키 생성
    pub fn signed_cookie(&self, name: &str, value: &str, path: &str, max_age_seconds: i64) -> AppResult<Cookie<'static>> {
        let cookie = Cookie::build(name.to_string(), value.to_string())
            .path(path.to_string())
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(max_age_seconds))
            .finish();

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(cookie);

        jar.get(name)
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("signed cookie {} missing from jar", name)))
    }

    /// 요청의 쿠키를 검증하고 원래 값을 돌려줍니다.
    pub fn verified_value(&self, req: &HttpRequest, name: &str) -> Option<String> {
        let cookie = req.cookie(name)?;

        let mut jar = CookieJar::new();
        jar.add_original(cookie);

        jar.signed(&self.key)
            .get(name)
            .map(|c| c.value().to_string())
    }

    /// 브라우저에서 쿠키를 지우는 만료 쿠키
    pub fn removal_cookie(&self, name: &str, path: &str) -> Cookie<'static> {
        let mut cookie = Cookie::build(name.to_string(), "")
            .path(path.to_string())
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_signed_cookie_round_trip() {
        let signer = CookieSigner::new("short", false);
        let cookie = signer.signed_cookie(SESSION_COOKIE, "token-value", "/", 60).unwrap();

        assert_ne!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));

        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(signer.verified_value(&req, SESSION_COOKIE).as_deref(), Some("token-value"));
    }

    #[test]
    fn test_tampered_or_foreign_cookie_is_rejected() {
        let signer = CookieSigner::new("secret-a", false);
        let other = CookieSigner::new("secret-b", false);
        let cookie = other.signed_cookie(SESSION_COOKIE, "token-value", "/", 60).unwrap();

        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert!(signer.verified_value(&req, SESSION_COOKIE).is_none());

        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "token-value"))
            .to_http_request();
        assert!(signer.verified_value(&req, SESSION_COOKIE).is_none());
    }

    #[test]
    fn test_removal_cookie_expires() {
        let signer = CookieSigner::new("secret", true);
        let cookie = signer.removal_cookie(SESSION_COOKIE, "/");

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.secure(), Some(true));
    }
}
