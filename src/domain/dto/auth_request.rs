//! 인증 요청관련 DTO
//!
//! 회원가입/로그인 폼과 OAuth 콜백 쿼리 파라미터를 매핑합니다.
//! 폼은 `application/x-www-form-urlencoded`로 전송됩니다.

use serde::Deserialize;
use validator::Validate;

/// `POST /register` 폼
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "사용자명은 1-64자 사이여야 합니다"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// `POST /login` 폼
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// OAuth 콜백 쿼리
///
/// 사용자가 동의를 거부하면 프로바이더는 `code` 없이 `error`만 보냅니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
