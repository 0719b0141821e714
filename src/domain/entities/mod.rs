//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 세션/OAuth 값 객체
//! └── dto/          ← 폼 및 외부 API 응답 DTO
//! ```
//!
//! 모든 엔티티는 `serde`를 통해 BSON으로 직렬화되며, `_id` 필드는
//! `ObjectId`로 매핑됩니다.

pub mod users;
