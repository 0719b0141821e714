//! 세션 기반 인증 모델

pub mod session_user;

pub use session_user::{SessionRecord, SessionUser};
