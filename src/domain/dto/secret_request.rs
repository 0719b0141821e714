//! 비밀 제출 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 비밀 최대 길이 (문자 수)
pub const MAX_SECRET_LENGTH: usize = 1000;

/// `POST /submit` 폼
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretRequest {
    #[validate(custom(function = "validate_secret"))]
    pub secret: String,
}

/// 앞뒤 공백을 제거한 값이 1..=`MAX_SECRET_LENGTH`자인지 확인합니다.
fn validate_secret(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("blank_secret")
            .with_message("비밀을 입력해주세요".into()));
    }
    if trimmed.chars().count() > MAX_SECRET_LENGTH {
        return Err(ValidationError::new("secret_too_long")
            .with_message(format!("비밀은 {}자 이하여야 합니다", MAX_SECRET_LENGTH).into()));
    }
    Ok(())
}
