//! Secrets 인증 서비스
//!
//! 로컬 계정, Google OAuth 2.0, Facebook OAuth 2.0 세 가지 방식으로 로그인하고
//! 서버 측 세션으로 인증 상태를 유지하는 웹 서비스입니다. 로그인한 사용자는
//! 익명 "비밀"을 하나 제출할 수 있고, 제출된 비밀은 작성자 정보 없이
//! 누구에게나 공개됩니다.
//!
//! # Features
//!
//! - **로컬 인증**: bcrypt 해시 기반 회원가입/로그인
//! - **OAuth 2.0**: Google, Facebook 소셜 로그인 (프로바이더 ID 당 사용자 하나)
//! - **서버 측 세션**: Redis에 저장, 서명된 HttpOnly 쿠키로 식별
//! - **접근 게이트**: 세션 없는 요청은 `/login`으로 리다이렉트
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지, 인증, 비밀 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Middleware/     │ ← AuthMiddleware, 핸들러
//! │ Handlers        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 자격 증명, 세션, OAuth, 신원 조정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_auth_service::core::AppContext;
//! use secrets_auth_service::routes::configure_all_routes;
//!
//! let context = web::Data::new(AppContext::new(config, users, sessions));
//! let app = App::new().app_data(context).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
