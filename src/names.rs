use crate::models::QuestionId;

pub const HOME_URL: &str = "/";
pub const CATEGORIES_URL: &str = "/categories";
pub const ALL_TOPICS_URL: &str = "/all-topics";
pub const ABOUT_URL: &str = "/about";
pub const SITEMAP_URL: &str = "/sitemap.xml";
pub const ROBOTS_URL: &str = "/robots.txt";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

pub fn category_url(category_id: &str) -> String {
    format!("/{category_id}")
}

pub fn category_tag_url(category_id: &str, tag: &str) -> String {
    format!("/{category_id}?tag={}", encode_query(tag))
}

pub fn quiz_page_url(quiz_id: &str) -> String {
    format!("/quiz/{quiz_id}")
}

pub fn select_answer_url(session_id: &str, question_id: QuestionId, option: usize) -> String {
    format!("/session/{session_id}/answer/{question_id}/{option}")
}

pub fn reveal_url(session_id: &str, question_id: QuestionId) -> String {
    format!("/session/{session_id}/reveal/{question_id}")
}

pub fn clock_url(session_id: &str) -> String {
    format!("/session/{session_id}/clock")
}

pub fn submit_url(session_id: &str) -> String {
    format!("/session/{session_id}/submit")
}

/// Percent-encodes everything outside the unreserved set.
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
