//! # Domain Layer
//!
//! 비즈니스 도메인의 엔티티, 값 객체, 데이터 전송 객체를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← User (MongoDB 문서)
//! ├── models/     ← SessionUser, SessionRecord, 프로바이더 사용자 정보
//! └── dto/        ← 폼 요청, OAuth 토큰 응답
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
