//! 세션 인증 미들웨어 (Access Gate)
//!
//! 보호된 라우트 앞에서 서명된 세션 쿠키를 검증하고 세션을 조회합니다.
//!
//! - 인증됨: [`SessionUser`]를 request extensions에 넣고 핸들러로 진행
//! - 미인증: 핸들러를 호출하지 않고 `302 Found`, `Location: /login`
//!
//! ```rust,ignore
//! cfg.service(
//!     web::resource("/submit")
//!         .wrap(AuthMiddleware::required())
//!         .route(web::get().to(handlers::secrets::submit_page))
//!         .route(web::post().to(handlers::secrets::submit_secret))
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpRequest, Result,
};

use crate::core::AppContext;
use crate::domain::models::auth::SessionUser;
use crate::errors::AppResult;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::SESSION_COOKIE;

/// 요청에 인증된 세션이 있는지 여부
pub fn is_authenticated(session: Option<&SessionUser>) -> bool {
    session.is_some()
}

/// 서명된 세션 쿠키로 현재 세션을 조회합니다.
///
/// 쿠키가 없거나 서명이 맞지 않거나 세션이 만료되었으면 `Ok(None)`입니다.
pub async fn session_from_request(req: &HttpRequest, context: &AppContext) -> AppResult<Option<SessionUser>> {
    let Some(token) = context.cookies.verified_value(req, SESSION_COOKIE) else {
        return Ok(None);
    };

    context.sessions.resolve(&token).await
}

#[derive(Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 세션이 없으면 `/login`으로 리다이렉트
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test::{call_and_read_body, call_service, init_service, TestRequest};
    use actix_web::{web, App, HttpResponse};

    use crate::core::context::test_support::test_context;

    async fn whoami(user: SessionUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    #[test]
    fn test_is_authenticated() {
        let user = SessionUser { user_id: "u1".to_string() };

        assert!(is_authenticated(Some(&user)));
        assert!(!is_authenticated(None));
    }

    #[actix_web::test]
    async fn test_missing_cookie_redirects_to_login() {
        let ctx = web::Data::new(test_context().context);
        let app = init_service(
            App::new()
                .app_data(ctx.clone())
                .service(web::resource("/private").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/private").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_valid_session_reaches_handler() {
        let ctx: web::Data<AppContext> = web::Data::new(test_context().context);
        let token = ctx.sessions.create("user-42").await.unwrap();
        let cookie = ctx.cookies.signed_cookie(SESSION_COOKIE, &token, "/", 60).unwrap();

        let app = init_service(
            App::new()
                .app_data(ctx.clone())
                .service(web::resource("/private").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let req = TestRequest::get().uri("/private").cookie(cookie).to_request();
        let body = call_and_read_body(&app, req).await;

        assert_eq!(body, "user-42");
    }

    #[actix_web::test]
    async fn test_destroyed_session_redirects() {
        let ctx: web::Data<AppContext> = web::Data::new(test_context().context);
        let token = ctx.sessions.create("user-42").await.unwrap();
        let cookie = ctx.cookies.signed_cookie(SESSION_COOKIE, &token, "/", 60).unwrap();
        ctx.sessions.destroy(&token).await.unwrap();

        let app = init_service(
            App::new()
                .app_data(ctx.clone())
                .service(web::resource("/private").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let req = TestRequest::get().uri("/private").cookie(cookie).to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
    }
}
