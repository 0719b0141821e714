//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - HTML 이스케이프

pub mod string_utils;
