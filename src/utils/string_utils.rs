//! # 문자열 유틸리티
//!
//! HTML 응답에 사용자 입력을 넣기 전에 사용하는 이스케이프 함수입니다.

/// HTML 특수 문자를 엔티티로 치환합니다.
///
/// 텍스트 노드와 큰따옴표 속성값 양쪽에 안전합니다.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
