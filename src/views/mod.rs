//! # HTML 뷰
//!
//! 서버 렌더링 페이지를 문자열로 만듭니다. 사용자 입력이 들어가는 곳은
//! 반드시 [`escape_html`]을 거칩니다.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::utils::string_utils::escape_html;

/// `text/html` 200 응답
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
{content}
</body>
</html>
"#,
        title = escape_html(title),
        content = content,
    )
}

fn social_buttons() -> &'static str {
    r#"  <div class="social">
    <a href="/auth/google">Sign In with Google</a>
    <a href="/auth/facebook">Sign In with Facebook</a>
  </div>"#
}

fn credentials_form(action: &str, submit_label: &str) -> String {
    format!(
        r#"  <form action="{action}" method="POST">
    <label for="username">Username</label>
    <input type="text" id="username" name="username" required maxlength="64">
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <button type="submit">{label}</button>
  </form>"#,
        action = action,
        label = submit_label,
    )
}

pub fn home_page() -> String {
    layout(
        "Secrets",
        r#"  <h1>Secrets</h1>
  <p>Don't keep your secrets, share them anonymously!</p>
  <a href="/register">Register</a>
  <a href="/login">Login</a>"#,
    )
}

pub fn login_page() -> String {
    layout(
        "Login",
        &format!(
            "  <h1>Login</h1>\n{}\n{}",
            credentials_form("/login", "Login"),
            social_buttons()
        ),
    )
}

pub fn register_page() -> String {
    layout(
        "Register",
        &format!(
            "  <h1>Register</h1>\n{}\n{}",
            credentials_form("/register", "Register"),
            social_buttons()
        ),
    )
}

/// 비밀 목록 페이지. 작성자 정보는 포함하지 않습니다.
pub fn secrets_page(secrets: &[String], authenticated: bool) -> String {
    let items = secrets
        .iter()
        .map(|s| format!("    <p class=\"secret-text\">{}</p>", escape_html(s)))
        .collect::<Vec<_>>()
        .join("\n");

    let actions = if authenticated {
        r#"  <a href="/logout">Log Out</a>
  <a href="/submit">Submit a Secret</a>"#
    } else {
        r#"  <a href="/login">Login</a>
  <a href="/submit">Submit a Secret</a>"#
    };

    layout(
        "Secrets",
        &format!(
            "  <h1>You've Discovered My Secret!</h1>\n  <div class=\"secrets\">\n{}\n  </div>\n{}",
            items, actions
        ),
    )
}

pub fn submit_page() -> String {
    layout(
        "Submit a Secret",
        r#"  <h1>Secrets</h1>
  <p>Don't keep your secrets, share them anonymously!</p>
  <form action="/submit" method="POST">
    <input type="text" name="secret" placeholder="What's your secret?" required maxlength="1000">
    <button type="submit">Submit</button>
  </form>"#,
    )
}
