//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 폼 기반 웹 애플리케이션이므로 사용자가 복구할 수 있는 에러(중복 사용자명,
//! 로그인 실패, OAuth 실패, 미인증)는 에러 페이지가 아니라 리다이렉트로
//! 응답합니다. 저장소/외부 서비스 에러는 서버 로그에만 상세 내용을 남기고
//! 클라이언트에는 일반적인 메시지만 전달합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP 응답 |
//! |----------|-----------|
//! | `StoreUnavailable` | 500 Internal Server Error |
//! | `DuplicateUsername` | 302 → `/register` |
//! | `AuthFailure` | 302 → `/login` |
//! | `OAuthUpstreamFailure` | 302 → `/login` |
//! | `Unauthenticated` | 302 → `/login` |
//! | `ValidationError` | 400 Bad Request |
//! | `ConfigError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn submit(user_id: &str, secret: &str) -> Result<(), AppError> {
//!     let updated = store.set_secret(user_id, secret).await?;
//!     if !updated {
//!         return Err(AppError::Unauthenticated);
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소(MongoDB, Redis)에 접근할 수 없음 (500)
    ///
    /// "사용자 없음"으로 해석해서는 안 됩니다.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 이미 사용 중인 사용자명으로 회원가입 시도 (302 → /register)
    #[error("Username already exists")]
    DuplicateUsername,

    /// 로컬 자격 증명 불일치 (302 → /login)
    ///
    /// 사용자명과 비밀번호 중 어느 쪽이 틀렸는지 구분하지 않습니다.
    #[error("Invalid username or password")]
    AuthFailure,

    /// OAuth 프로바이더가 인증을 거부했거나 통신에 실패함 (302 → /login)
    #[error("OAuth provider error: {0}")]
    OAuthUpstreamFailure(String),

    /// 유효한 세션 없이 보호된 리소스 요청 (302 → /login)
    #[error("Authentication required")]
    Unauthenticated,

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 설정 누락 또는 형식 오류 (시작 시 실패)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 복구 가능한 에러의 리다이렉트 대상 경로
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AppError::DuplicateUsername => Some("/register"),
            AppError::AuthFailure
            | AppError::OAuthUpstreamFailure(_)
            | AppError::Unauthenticated => Some("/login"),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            _ if self.redirect_target().is_some() => StatusCode::FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 상세 내용은 서버 로그에만 기록하고, 응답 본문에는
    /// 일반적인 메시지만 담습니다.
    fn error_response(&self) -> HttpResponse {
        if let Some(location) = self.redirect_target() {
            match self {
                AppError::OAuthUpstreamFailure(detail) => {
                    log::warn!("OAuth 인증 실패, 로그인 페이지로 이동: {}", detail)
                }
                other => log::debug!("{} → {}", other, location),
            }
            return HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish();
        }

        match self {
            AppError::ValidationError(msg) => HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(msg.clone()),
            other => {
                log::error!("요청 처리 실패: {}", other);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Something went wrong. Please try again later.")
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}
