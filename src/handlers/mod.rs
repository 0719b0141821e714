//! HTTP 핸들러 모듈
//!
//! - [`pages`] - 홈, 로그인/회원가입 폼
//! - [`auth`] - 로컬 인증, 로그아웃, OAuth
//! - [`secrets`] - 비밀 목록, 제출

pub mod pages;
pub mod auth;
pub mod secrets;
