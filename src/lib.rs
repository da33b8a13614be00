rust_i18n::i18n!("locales", fallback = "en");

pub mod classify;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod render;
pub mod seo;
pub mod session;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::{config::SiteConfig, session::SessionRegistry, store::ContentStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub sessions: SessionRegistry,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(store: ContentStore, site: SiteConfig) -> Self {
        Self {
            store: Arc::new(store),
            sessions: SessionRegistry::new(),
            site,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::seo::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::session::routes())
        .merge(handlers::legacy::routes())
        .merge(handlers::category::routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
