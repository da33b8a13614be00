use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{names, seo, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::SITEMAP_URL, get(sitemap))
        .route(names::ROBOTS_URL, get(robots))
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        seo::sitemap_xml(&state.site, &state.store),
    )
}

async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots_txt(&state.site),
    )
}
