//! 라우트 설정 모듈
//!
//! | method | path | 인증 |
//! |--------|------|------|
//! | GET | `/`, `/login`, `/register` | - |
//! | POST | `/register`, `/login` | - |
//! | GET | `/logout` | - |
//! | GET | `/auth/google`, `/auth/facebook` | - |
//! | GET | `/auth/google/secrets`, `/auth/facebook/secrets` | - (OAuth 콜백) |
//! | GET | `/secrets` | - |
//! | GET, POST | `/submit` | `AuthMiddleware::required()` |
//! | GET | `/health` | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(context))
//!     .configure(configure_all_routes)
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_form)
        .service(handlers::pages::register_form);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // 로컬 인증
        .service(handlers::auth::register)
        .service(handlers::auth::local_login)
        .service(handlers::auth::logout)
        // OAuth
        .service(handlers::auth::google_login)
        .service(handlers::auth::google_callback)
        .service(handlers::auth::facebook_login)
        .service(handlers::auth::facebook_callback);
}

fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::secrets::list_secrets);

    cfg.service(
        web::resource("/submit")
            .wrap(AuthMiddleware::required())
            .route(web::get().to(handlers::secrets::submit_page))
            .route(web::post().to(handlers::secrets::submit_secret)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": "Redis",
            "auth": ["local", "google", "facebook"]
        }
    }))
}
