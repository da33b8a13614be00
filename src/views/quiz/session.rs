use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    models::{Question, Quiz},
    names,
    session::{format_elapsed, QuizSession},
};

pub const SESSION_PANEL_ID: &str = "quiz-session";

pub struct SessionPanelData<'a> {
    pub session_id: String,
    pub quiz: &'a Quiz,
    pub session: &'a QuizSession,
}

/// Elapsed time, polled every second while the session is running.
pub fn clock(session_id: &str, elapsed_seconds: u64, running: bool) -> Markup {
    html! {
        @if running {
            span."clock" hx-get=(names::clock_url(session_id)) hx-trigger="every 1s" hx-swap="outerHTML" {
                (format_elapsed(elapsed_seconds))
            }
        } @else {
            span."clock" { (format_elapsed(elapsed_seconds)) }
        }
    }
}

fn progress(session: &QuizSession) -> Markup {
    let answered = session.answered_count();
    let total = session.total_questions();
    html! {
        div."progress" {
            progress value=(answered) max=(total) {}
            small { (t!("quiz.progress", answered = answered, total = total)) }
        }
    }
}

fn question_card(data: &SessionPanelData, index: usize, question: &Question) -> Markup {
    let selected = data.session.selected(question.id);
    let revealed = data.session.is_revealed(question.id);
    let target = format!("#{SESSION_PANEL_ID}");

    html! {
        article."question" id=(format!("question-{}", question.id)) {
            header {
                small { (t!("quiz.question_number", number = index + 1, total = data.quiz.questions.len())) }
                h3 { (question.question) }
            }
            div."options" role="group" {
                @for (option, text) in question.options.iter().enumerate() {
                    button.option.selected[selected == Some(option)].correct[revealed && option == question.correct_answer]
                           type="button"
                           aria-pressed=(selected == Some(option))
                           hx-post=(names::select_answer_url(&data.session_id, question.id, option))
                           hx-target=(target)
                           hx-swap="outerHTML" {
                        (text)
                    }
                }
            }
            footer {
                button type="button"
                       class="outline secondary"
                       hx-post=(names::reveal_url(&data.session_id, question.id))
                       hx-target=(target)
                       hx-swap="outerHTML" {
                    @if revealed { (t!("quiz.hide_answer")) } @else { (t!("quiz.show_answer")) }
                }
                @if revealed {
                    div."explanation" {
                        p {
                            strong { (t!("quiz.correct_answer")) }
                            " "
                            (question.correct_option().unwrap_or_default())
                        }
                        p { (question.explanation) }
                    }
                }
            }
        }
    }
}

/// The interactive part of the quiz page. Every session mutation re-renders it.
pub fn session_panel(data: SessionPanelData) -> Markup {
    let can_submit = data.session.can_submit();
    html! {
        section id=(SESSION_PANEL_ID) {
            div."session-bar" {
                (progress(data.session))
                (clock(&data.session_id, data.session.elapsed_seconds(), true))
            }

            @for (index, question) in data.quiz.questions.iter().enumerate() {
                (question_card(&data, index, question))
            }

            div."submit" {
                button type="button"
                       disabled[!can_submit]
                       hx-post=(names::submit_url(&data.session_id))
                       hx-target=(format!("#{SESSION_PANEL_ID}"))
                       hx-swap="outerHTML show:window:top" {
                    (t!("quiz.submit"))
                }
                @if !can_submit {
                    small { (t!("quiz.remaining", count = data.session.remaining())) }
                }
            }
        }
    }
}
