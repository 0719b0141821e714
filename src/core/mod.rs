//! # Core Module
//!
//! 애플리케이션 전역 상태를 담는 [`AppContext`]를 제공합니다.
//!
//! 모든 의존성은 `main`에서 명시적으로 생성되어 컨텍스트에 조립됩니다.
//! 전역 싱글톤이나 서비스 로케이터는 사용하지 않으므로, 테스트는 메모리 저장소로
//! 같은 컨텍스트를 만들어 실제 라우트를 그대로 호출할 수 있습니다.
//!
//! ```rust,ignore
//! let context = web::Data::new(AppContext::new(config, users, sessions));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(context.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod context;

pub use context::AppContext;
