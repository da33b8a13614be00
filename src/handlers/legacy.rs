use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{names, rejections::AppError, AppState};

/// Old URL shapes, redirected with 301 to their canonical pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/category/{category_id}", get(category))
        .route("/category/{category_id}/quiz/{quiz_id}", get(quiz))
        .route("/{category_id}/quiz/{quiz_id}", get(quiz))
}

fn moved_permanently(location: String) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response()
}

async fn category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Response, AppError> {
    let category = state
        .store
        .category(&category_id)
        .ok_or(AppError::NotFound("Category"))?;
    Ok(moved_permanently(names::category_url(&category.id)))
}

async fn quiz(
    State(state): State<AppState>,
    Path((_category_id, quiz_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let quiz = state
        .store
        .quiz(&quiz_id)
        .ok_or(AppError::NotFound("Quiz"))?;
    Ok(moved_permanently(names::quiz_page_url(&quiz.id)))
}
