//! 정적 페이지 핸들러 (홈, 로그인 폼, 회원가입 폼)

use actix_web::{get, HttpResponse};

use crate::views;

#[get("/")]
pub async fn home() -> HttpResponse {
    views::html(views::home_page())
}

#[get("/login")]
pub async fn login_form() -> HttpResponse {
    views::html(views::login_page())
}

#[get("/register")]
pub async fn register_form() -> HttpResponse {
    views::html(views::register_page())
}
