use std::collections::BTreeSet;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::IsHtmx,
    rejections::AppError,
    seo, views,
    views::category::{self as category_views, CategoryPageData},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/{category_id}", get(category_page))
}

#[derive(Deserialize)]
struct CategoryQuery {
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    search: Option<String>,
}

async fn category_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(category_id): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<Markup, AppError> {
    let store = &state.store;
    let category = store
        .category(&category_id)
        .ok_or(AppError::NotFound("Category"))?;

    let tag = query.tag.as_deref().filter(|t| !t.is_empty());
    let search = query.search.as_deref().filter(|s| !s.trim().is_empty());

    let tags: BTreeSet<&str> = store
        .quizzes_in_category(&category.id)
        .flat_map(|q| q.tags.iter().map(String::as_str))
        .collect();
    let total_quizzes = store.quiz_count(&category.id);

    let meta = seo::category_meta(&state.site, category, total_quizzes);
    let body = category_views::category(CategoryPageData {
        category,
        tags: tags.into_iter().collect(),
        quizzes: store.filter_quizzes(&category.id, tag, search),
        total_quizzes,
        active_tag: tag,
        search,
    });

    Ok(views::render(is_htmx, &meta, body))
}
