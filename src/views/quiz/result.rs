use maud::{html, Markup};
use rust_i18n::t;

use super::session::SESSION_PANEL_ID;
use crate::{
    models::Quiz,
    names,
    session::{format_elapsed, QuizResult, Verdict},
    views::components::nav_link,
};

fn verdict_text(verdict: Verdict) -> String {
    match verdict {
        Verdict::Excellent => t!("result.excellent").to_string(),
        Verdict::Good => t!("result.good").to_string(),
        Verdict::KeepStudying => t!("result.keep_studying").to_string(),
    }
}

fn review(quiz: &Quiz, result: &QuizResult) -> Markup {
    html! {
        ol."review" {
            @for question in &quiz.questions {
                @if let Some(outcome) = result.outcome(question.id) {
                    li.correct[outcome.is_correct].incorrect[!outcome.is_correct] {
                        p { strong { (question.question) } }
                        p {
                            (t!("result.your_answer")) " "
                            @match outcome.selected.and_then(|i| question.options.get(i)) {
                                Some(text) => { (text) }
                                None => { em { (t!("result.unanswered")) } }
                            }
                        }
                        @if !outcome.is_correct {
                            p {
                                (t!("quiz.correct_answer")) " "
                                (question.correct_option().unwrap_or_default())
                            }
                        }
                        p."explanation" { (question.explanation) }
                    }
                }
            }
        }
    }
}

/// Replaces the session panel once the quiz is submitted.
pub fn results(quiz: &Quiz, result: &QuizResult) -> Markup {
    html! {
        section.results id=(SESSION_PANEL_ID) {
            header {
                h2 { (t!("result.title")) }
                p."score" { (result.score_percentage) "%" }
                p { (verdict_text(result.verdict())) }
                p {
                    (t!("result.summary",
                        correct = result.correct_count,
                        total = result.total_questions,
                        time = format_elapsed(result.elapsed_seconds)))
                }
            }

            (review(quiz, result))

            footer {
                (nav_link(&names::quiz_page_url(&quiz.id), html! { (t!("result.try_again")) }))
                " "
                (nav_link(&names::category_url(&quiz.category), html! { (t!("result.more_quizzes")) }))
            }
        }
    }
}
