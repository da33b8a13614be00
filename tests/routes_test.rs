mod common;

use axum::http::{
    header::{CONTENT_TYPE, LOCATION},
    Method, StatusCode,
};
use common::{app, body_string, send};
use triviaziggle::names;

#[tokio::test]
async fn static_pages_render() {
    let app = app();

    for uri in ["/", "/categories", "/all-topics", "/about"] {
        let resp = send(&app, Method::GET, uri, false).await;
        assert_eq!(resp.status(), StatusCode::OK, "expected OK for {uri}");
    }

    let home = body_string(send(&app, Method::GET, "/", false).await).await;
    assert!(home.starts_with("<!DOCTYPE html>"));
    assert!(home.contains("Interactive Trivia Quizzes"));
    assert!(home.contains(r#"<link rel="canonical" href="https://triviaziggle.com">"#));
    assert!(home.contains("Featured categories"));
}

#[tokio::test]
async fn htmx_requests_get_fragments() {
    let app = app();
    let body = body_string(send(&app, Method::GET, "/about", true).await).await;
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.starts_with("<title>About Us | Triviaziggle</title>"));
}

#[tokio::test]
async fn category_page_filters_by_tag_and_search() {
    let app = app();

    let resp = send(&app, Method::GET, "/science", false).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Science Trivia - Interactive Science Quizzes | Triviaziggle"));
    assert!(body.contains("Solar System Explorer"));
    assert!(body.contains("The Human Body"));

    let body = body_string(send(&app, Method::GET, "/science?tag=biology", false).await).await;
    assert!(body.contains("The Human Body"));
    assert!(!body.contains("Solar System Explorer"));

    let body = body_string(send(&app, Method::GET, "/science?search=PLANETS", false).await).await;
    assert!(body.contains("Solar System Explorer"));
    assert!(!body.contains("The Human Body"));
}

#[tokio::test]
async fn unknown_pages_are_not_found() {
    let app = app();

    for uri in [
        "/no-such-category",
        "/quiz/no-such-quiz",
        "/category/no-such-category",
        "/science/quiz/no-such-quiz",
        "/a/b/c/d",
    ] {
        let resp = send(&app, Method::GET, uri, false).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "expected 404 for {uri}");
    }

    let body = body_string(send(&app, Method::GET, "/quiz/no-such-quiz", false).await).await;
    assert!(body.contains("<title>Quiz Not Found</title>"));
    assert!(body.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
}

#[tokio::test]
async fn legacy_urls_redirect_permanently() {
    let app = app();

    let cases = [
        ("/category/science", "/science"),
        ("/category/science/quiz/solar-system-quiz", "/quiz/solar-system-quiz"),
        ("/science/quiz/solar-system-quiz", "/quiz/solar-system-quiz"),
    ];
    for (from, to) in cases {
        let resp = send(&app, Method::GET, from, false).await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY, "for {from}");
        assert_eq!(resp.headers()[LOCATION], to);
    }
}

#[tokio::test]
async fn sitemap_and_robots() {
    let app = app();

    let resp = send(&app, Method::GET, names::SITEMAP_URL, false).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));
    let xml = body_string(resp).await;
    assert!(xml.contains("<loc>https://triviaziggle.com/technology</loc>"));
    assert!(xml.contains("<loc>https://triviaziggle.com/quiz/ancient-rome-quiz</loc>"));
    assert_eq!(xml.matches("<url>").count(), 4 + 4 + 6);

    let robots = body_string(send(&app, Method::GET, names::ROBOTS_URL, false).await).await;
    assert!(robots.contains("Sitemap: https://triviaziggle.com/sitemap.xml"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = app();
    let resp = send(&app, Method::GET, "/static/index.css", false).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/css");

    let resp = send(&app, Method::GET, "/static/missing.css", false).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn state_changing_requests_need_htmx_header() {
    let app = app();
    let resp = send(&app, Method::POST, "/session/01ARZ3NDEKTSV4RRFFQ69G5FAV/submit", false).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
