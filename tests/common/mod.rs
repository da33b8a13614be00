#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response},
    Router,
};
use tower::ServiceExt;
use triviaziggle::{
    config::SiteConfig,
    router,
    store::{ContentStore, DirSource},
    AppState,
};

pub fn app_state() -> AppState {
    let data = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
    let store = ContentStore::load(&DirSource::new(data)).expect("fixtures in data/ should load");
    AppState::new(store, SiteConfig::default())
}

pub fn app() -> Router {
    router(app_state())
}

pub async fn send(app: &Router, method: Method, uri: &str, htmx: bool) -> Response<Body> {
    let mut req = Request::builder().method(method).uri(uri);
    if htmx {
        req = req.header("HX-Request", "true");
    }
    app.clone()
        .oneshot(req.body(Body::empty()).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
