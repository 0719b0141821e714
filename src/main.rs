//! Secrets 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis 연결을 설정하고 세션 기반의 웹 페이지를 제공합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use secrets_auth_service::caching::RedisClient;
use secrets_auth_service::config::AppConfig;
use secrets_auth_service::core::AppContext;
use secrets_auth_service::db::Database;
use secrets_auth_service::errors::{AppError, AppResult};
use secrets_auth_service::repositories::{MongoUserRepository, RedisSessionStore};
use secrets_auth_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Secrets 인증 서비스 시작중...");

    let context = match build_context().await {
        Ok(context) => web::Data::new(context),
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(context).await
}

/// 설정을 읽고 저장소에 연결한 뒤 [`AppContext`]를 구성합니다.
///
/// 필수 설정이 없거나 MongoDB/Redis에 연결할 수 없으면 서버를 띄우지 않습니다.
async fn build_context() -> AppResult<AppContext> {
    let config = AppConfig::from_env()?;
    info!("환경: {:?}", config.environment);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database).await?;
    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    let users = MongoUserRepository::new(database);
    users.create_indexes().await?;

    let redis_client = RedisClient::connect(&config.database.redis_url).await?;
    info!("✅ Redis 연결 성공");

    let sessions = RedisSessionStore::new(redis_client);

    Ok(AppContext::new(config, Arc::new(users), Arc::new(sessions)))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate limit 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: web::Data<AppContext>) -> std::io::Result<()> {
    let bind_address = context.config.server.bind_address();
    let rate_limit = context.config.rate_limit.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::other(AppError::ConfigError(
                "rate limit values must be greater than zero".to_string(),
            ))
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// ```bash
/// RUST_LOG=secrets_auth_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
