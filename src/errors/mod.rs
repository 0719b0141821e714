//! 에러 모듈
//!
//! [`AppError`](errors::AppError)와 [`AppResult`](errors::AppResult)를 재export합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
