use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// 세션에서 확인된 사용자 신원
///
/// 세션에는 변경 가능한 사용자 문서 전체가 아니라 사용자 ID만 바인딩됩니다.
/// 핸들러는 필요할 때 저장소에서 최신 문서를 다시 읽습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    pub user_id: String,
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 요청 extensions에 넣어 둔 값을 꺼냅니다.
/// 게이트를 거치지 않은 라우트에서 사용하면 401로 응답합니다.
impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 세션 저장소에 보관되는 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    /// 로그인 일시 (Unix timestamp)
    pub created_at: i64,
}
