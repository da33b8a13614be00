use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use ulid::Ulid;

use crate::{
    models::QuestionId,
    rejections::AppError,
    session::{QuizSession, SelectOutcome, SubmitOutcome},
    views::quiz::{self as quiz_views, SessionPanelData},
    AppState,
};

/// Tells htmx to stop polling.
const STOP_POLLING: u16 = 286;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/session/{session_id}/answer/{question_id}/{option}",
            post(select_answer),
        )
        .route("/session/{session_id}/reveal/{question_id}", post(toggle_reveal))
        .route("/session/{session_id}/clock", get(clock))
        .route("/session/{session_id}/submit", post(submit))
}

fn parse_id(session_id: &str) -> Result<Ulid, AppError> {
    session_id
        .parse()
        .map_err(|_| AppError::NotFound("Session"))
}

/// Runs `f` against the live session and hands back a snapshot for rendering.
fn mutate<T>(
    state: &AppState,
    session_id: &str,
    f: impl FnOnce(&mut QuizSession) -> T,
) -> Result<(T, QuizSession), AppError> {
    let id = parse_id(session_id)?;
    state
        .sessions
        .with_session(id, |session| {
            let out = f(session);
            (out, session.clone())
        })
        .ok_or(AppError::NotFound("Session"))
}

/// The session panel while in progress, the results once completed.
fn panel(state: &AppState, session_id: &str, session: &QuizSession) -> Result<Markup, AppError> {
    let quiz = state
        .store
        .quiz(session.quiz_id())
        .ok_or(AppError::NotFound("Quiz"))?;

    Ok(match session.result() {
        Some(result) => quiz_views::results(quiz, result),
        None => quiz_views::session_panel(SessionPanelData {
            session_id: session_id.to_string(),
            quiz,
            session,
        }),
    })
}

async fn select_answer(
    State(state): State<AppState>,
    Path((session_id, question_id, option)): Path<(String, QuestionId, usize)>,
) -> Result<Markup, AppError> {
    let (outcome, session) = mutate(&state, &session_id, |s| s.select_answer(question_id, option))?;

    match outcome {
        SelectOutcome::Selected => panel(&state, &session_id, &session),
        SelectOutcome::AlreadyCompleted => Err(AppError::Input("quiz already submitted")),
        SelectOutcome::UnknownQuestion => Err(AppError::Input("unknown question")),
        SelectOutcome::OptionOutOfRange => Err(AppError::Input("option out of range")),
    }
}

async fn toggle_reveal(
    State(state): State<AppState>,
    Path((session_id, question_id)): Path<(String, QuestionId)>,
) -> Result<Markup, AppError> {
    let (revealed, session) = mutate(&state, &session_id, |s| s.toggle_reveal(question_id))?;
    if revealed.is_none() {
        return Err(AppError::Input("unknown question"));
    }
    panel(&state, &session_id, &session)
}

/// Doubles as the page's heartbeat: polling keeps the session from being evicted.
async fn clock(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&session_id)?;
    let (elapsed, completed) = state
        .sessions
        .with_session(id, |s| (s.elapsed_seconds(), s.is_completed()))
        .ok_or(AppError::NotFound("Session"))?;

    if completed {
        let status = StatusCode::from_u16(STOP_POLLING).unwrap_or(StatusCode::OK);
        return Ok((status, quiz_views::clock(&session_id, elapsed, false)).into_response());
    }
    Ok(quiz_views::clock(&session_id, elapsed, true).into_response())
}

async fn submit(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Markup, AppError> {
    let (outcome, session) = mutate(&state, &session_id, QuizSession::submit)?;

    match outcome {
        SubmitOutcome::Completed => {
            if let Some(result) = session.result() {
                tracing::info!(
                    "session {session_id} completed quiz '{}': {}/{} ({}%) in {}s",
                    session.quiz_id(),
                    result.correct_count,
                    result.total_questions,
                    result.score_percentage,
                    result.elapsed_seconds
                );
            }
            panel(&state, &session_id, &session)
        }
        SubmitOutcome::AlreadyCompleted => panel(&state, &session_id, &session),
        SubmitOutcome::Incomplete { missing } => {
            tracing::debug!("session {session_id} submitted with {} unanswered", missing.len());
            Err(AppError::Input("every question needs an answer before submitting"))
        }
    }
}
