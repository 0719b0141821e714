//! Authentication HTTP Handlers
//!
//! 로컬 회원가입/로그인, 로그아웃, Google/Facebook OAuth 흐름을 처리합니다.
//! 인증에 성공하면 서버 측 세션을 만들고 서명된 `secrets_sid` 쿠키와 함께
//! `/secrets`로 리다이렉트합니다.
//!
//! # Auth Providers
//!
//! - **로컬 인증**: `POST /register`, `POST /login`
//! - **Google**: `GET /auth/google` → `GET /auth/google/secrets`
//! - **Facebook**: `GET /auth/facebook` → `GET /auth/facebook/secrets`

use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse, HttpResponseBuilder};
use log::{info, warn};

use crate::config::IdentityProvider;
use crate::core::AppContext;
use crate::domain::dto::{LocalLoginRequest, OAuthCallbackQuery, RegisterRequest};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::services::auth::oauth::generate_state;
use crate::services::auth::{OAUTH_STATE_COOKIE, OAUTH_STATE_TTL_SECONDS, SESSION_COOKIE};

const OAUTH_STATE_PATH: &str = "/auth";

/// 세션을 새로 발급하고 `/secrets`로 보내는 응답 빌더
///
/// 요청에 이전 세션이 있으면 먼저 폐기합니다.
async fn start_session(req: &HttpRequest, ctx: &AppContext, user: &User) -> AppResult<HttpResponseBuilder> {
    if let Some(previous) = ctx.cookies.verified_value(req, SESSION_COOKIE) {
        ctx.sessions.destroy(&previous).await?;
    }

    let token = ctx.sessions.create(&user.id_string()).await?;
    let max_age = i64::try_from(ctx.sessions.ttl_seconds()).unwrap_or(i64::MAX);
    let cookie = ctx.cookies.signed_cookie(SESSION_COOKIE, &token, "/", max_age)?;

    let mut builder = HttpResponse::Found();
    builder
        .insert_header((header::LOCATION, "/secrets"))
        .cookie(cookie);
    Ok(builder)
}

#[post("/register")]
pub async fn register(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    form: web::Form<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = ctx.credentials.register(&form).await?;

    Ok(start_session(&req, &ctx, &user).await?.finish())
}

/// 로컬 로그인
///
/// 자격 증명을 먼저 검증하고, 성공한 경우에만 세션을 만듭니다.
#[post("/login")]
pub async fn local_login(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    form: web::Form<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = match ctx.credentials.verify(&form).await {
        Ok(user) => user,
        Err(AppError::AuthFailure) => {
            warn!("로컬 로그인 실패");
            return Err(AppError::AuthFailure);
        }
        Err(e) => return Err(e),
    };

    info!("로컬 로그인 성공: 사용자 ID {}", user.id_string());
    Ok(start_session(&req, &ctx, &user).await?.finish())
}

#[get("/logout")]
pub async fn logout(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    if let Some(token) = ctx.cookies.verified_value(&req, SESSION_COOKIE) {
        ctx.sessions.destroy(&token).await?;
    }

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(ctx.cookies.removal_cookie(SESSION_COOKIE, "/"))
        .finish())
}

#[get("/auth/google")]
pub async fn google_login(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    begin_oauth(&ctx, IdentityProvider::Google)
}

#[get("/auth/facebook")]
pub async fn facebook_login(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    begin_oauth(&ctx, IdentityProvider::Facebook)
}

#[get("/auth/google/secrets")]
pub async fn google_callback(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    complete_oauth(&req, &ctx, IdentityProvider::Google, &query).await
}

#[get("/auth/facebook/secrets")]
pub async fn facebook_callback(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    complete_oauth(&req, &ctx, IdentityProvider::Facebook, &query).await
}

/// state를 서명 쿠키에 저장하고 프로바이더 인증 화면으로 보냅니다.
fn begin_oauth(ctx: &AppContext, provider: IdentityProvider) -> AppResult<HttpResponse> {
    let state = generate_state();
    let cookie = ctx.cookies.signed_cookie(
        OAUTH_STATE_COOKIE,
        &state,
        OAUTH_STATE_PATH,
        OAUTH_STATE_TTL_SECONDS,
    )?;
    let location = ctx.oauth_provider(provider).authorization_url(&state);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish())
}

/// 콜백 처리. 프로바이더 쪽 실패는 모두 `/login`으로 리다이렉트합니다.
async fn complete_oauth(
    req: &HttpRequest,
    ctx: &AppContext,
    provider: IdentityProvider,
    query: &OAuthCallbackQuery,
) -> AppResult<HttpResponse> {
    let expected_state = ctx.cookies.verified_value(req, OAUTH_STATE_COOKIE);
    let clear_state = ctx.cookies.removal_cookie(OAUTH_STATE_COOKIE, OAUTH_STATE_PATH);

    match authenticate_callback(ctx, provider, query, expected_state.as_deref()).await {
        Ok(user) => {
            let mut builder = start_session(req, ctx, &user).await?;
            Ok(builder.cookie(clear_state).finish())
        }
        Err(AppError::OAuthUpstreamFailure(detail)) => {
            warn!("{} OAuth 실패: {}", provider.as_str(), detail);
            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, "/login"))
                .cookie(clear_state)
                .finish())
        }
        Err(e) => Err(e),
    }
}

async fn authenticate_callback(
    ctx: &AppContext,
    provider: IdentityProvider,
    query: &OAuthCallbackQuery,
    expected_state: Option<&str>,
) -> AppResult<User> {
    if let Some(error) = &query.error {
        return Err(AppError::OAuthUpstreamFailure(format!(
            "{} ({})",
            error,
            query.error_description.as_deref().unwrap_or("no description")
        )));
    }

    match (expected_state, query.state.as_deref()) {
        (Some(expected), Some(received)) if expected == received => {}
        _ => return Err(AppError::OAuthUpstreamFailure("state mismatch".to_string())),
    }

    let code = query
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::OAuthUpstreamFailure("missing authorization code".to_string()))?;

    let provider_id = ctx.oauth_provider(provider).fetch_provider_id(code).await?;
    if provider_id.trim().is_empty() {
        return Err(AppError::OAuthUpstreamFailure("empty provider user id".to_string()));
    }

    ctx.reconciler.find_or_create(provider, &provider_id).await
}
