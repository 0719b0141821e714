//! 비밀 목록/제출 핸들러
//!
//! - `GET /secrets` - 누구나 조회 가능
//! - `GET /submit`, `POST /submit` - [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 뒤에서만 호출됨

use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::core::AppContext;
use crate::domain::dto::SubmitSecretRequest;
use crate::domain::models::auth::SessionUser;
use crate::errors::AppError;
use crate::middlewares::{is_authenticated, session_from_request};
use crate::views;

#[get("/secrets")]
pub async fn list_secrets(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    let session = session_from_request(&req, &ctx).await?;
    let secrets = ctx.secrets.list_secrets().await?;

    Ok(views::html(views::secrets_page(&secrets, is_authenticated(session.as_ref()))))
}

pub async fn submit_page(_user: SessionUser) -> HttpResponse {
    views::html(views::submit_page())
}

pub async fn submit_secret(
    user: SessionUser,
    ctx: web::Data<AppContext>,
    form: web::Form<SubmitSecretRequest>,
) -> Result<HttpResponse, AppError> {
    ctx.secrets.submit_secret(&user.user_id, &form).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/secrets"))
        .finish())
}
