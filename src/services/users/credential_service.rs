//! # 로컬 자격 증명 서비스
//!
//! 사용자명/비밀번호 회원가입과 로그인 검증을 담당합니다.
//!
//! ## 보안 특징
//!
//! - **bcrypt 해싱**: 환경별 cost, 솔트 자동 생성
//! - **평문 미보관**: 비밀번호 원문은 저장하거나 로그에 남기지 않음
//! - **균일한 실패**: 없는 사용자, OAuth 전용 계정, 틀린 비밀번호 모두 같은 `AuthFailure`
//!
//! 해싱과 검증은 CPU 집약적이므로 `web::block`으로 워커 스레드 밖에서 실행합니다.

use std::sync::Arc;

use actix_web::web;
use log::{debug, info};
use validator::Validate;

use crate::domain::dto::{LocalLoginRequest, RegisterRequest};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

pub struct CredentialService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 로컬 계정 등록
    ///
    /// # 에러
    ///
    /// * `ValidationError` - 사용자명/비밀번호 형식 오류
    /// * `DuplicateUsername` - 이미 사용 중인 사용자명 (사전 확인 또는 유니크 인덱스)
    /// * `StoreUnavailable` - 저장소 장애
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }

        let password = request.password.clone();
        let cost = self.bcrypt_cost;
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = self.users
            .create(User::new_local(request.username.clone(), password_hash))
            .await?;

        info!("로컬 회원가입: 사용자 ID {}", user.id_string());
        Ok(user)
    }

    /// 사용자명/비밀번호 검증
    ///
    /// 검증은 세션이 생기기 전에 수행되며, 성공한 경우에만 사용자를 돌려줍니다.
    /// 비밀번호 상태는 변경하지 않습니다.
    pub async fn verify(&self, request: &LocalLoginRequest) -> AppResult<User> {
        request.validate()?;

        let user = self.users
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::AuthFailure)?;

        let password_hash = match user.password_hash.clone() {
            Some(hash) if user.can_authenticate_with_password() => hash,
            _ => {
                debug!("비밀번호 없는 계정으로 로컬 로그인 시도: {}", user.id_string());
                return Err(AppError::AuthFailure);
            }
        };

        let password = request.password.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(AppError::AuthFailure);
        }

        Ok(user)
    }
}
