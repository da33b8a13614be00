use axum::{
    extract::{Path, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{
    extractors::{IsHtmx, PreviousSession},
    names,
    rejections::{AppError, ResultExt},
    seo, utils, views,
    views::quiz::{self as quiz_views, QuizPageData, SessionPanelData},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/quiz/{quiz_id}", get(quiz_page))
}

/// Every visit starts a fresh attempt; the attempt of the page the visitor
/// came from is dropped.
async fn quiz_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    PreviousSession(previous): PreviousSession,
    Path(quiz_id): Path<String>,
) -> Result<Response, AppError> {
    let store = &state.store;
    let quiz = store.quiz(&quiz_id).ok_or(AppError::NotFound("Quiz"))?;
    let category = store
        .category(&quiz.category)
        .ok_or(AppError::NotFound("Quiz"))?;

    if let Some(previous) = previous {
        state.sessions.close(previous);
    }
    let session_id = state.sessions.open(quiz);
    let session = state
        .sessions
        .with_session(session_id, |s| s.clone())
        .ok_or(AppError::Internal("could not open session"))?;
    tracing::info!("started quiz '{}' in session {session_id}", quiz.id);

    let body = quiz_views::quiz_page(QuizPageData {
        quiz,
        category,
        panel: SessionPanelData {
            session_id: session_id.to_string(),
            quiz,
            session: &session,
        },
        content: store.content_for_quiz(&quiz.id),
    });
    let page = views::render(is_htmx, &seo::quiz_meta(&state.site, quiz), body);

    let cookie = utils::cookie(
        names::QUIZ_SESSION_COOKIE_NAME,
        &session_id.to_string(),
        state.site.session_idle.as_secs(),
        state.site.secure_cookies,
    )
    .reject("could not build session cookie")?;

    Ok(([(SET_COOKIE, cookie)], page).into_response())
}
