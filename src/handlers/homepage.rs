use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::{extractors::IsHtmx, names, seo, views, views::homepage as homepage_views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(homepage))
        .route(names::CATEGORIES_URL, get(categories))
        .route(names::ALL_TOPICS_URL, get(all_topics))
        .route(names::ABOUT_URL, get(about))
}

async fn homepage(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(
        is_htmx,
        &seo::home_meta(&state.site),
        homepage_views::home(&state.store),
    )
}

async fn categories(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(
        is_htmx,
        &seo::categories_meta(&state.site),
        homepage_views::categories(&state.store),
    )
}

async fn all_topics(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(
        is_htmx,
        &seo::all_topics_meta(&state.site),
        homepage_views::all_topics(&state.store),
    )
}

async fn about(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(is_htmx, &seo::about_meta(&state.site), homepage_views::about())
}
