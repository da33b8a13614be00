mod article;
mod result;
mod session;

pub use article::article;
pub use result::results;
pub use session::{clock, session_panel, SessionPanelData, SESSION_PANEL_ID};

use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    models::{Category, Quiz, QuizContent},
    names,
    views::components::{breadcrumbs, tag},
};

pub struct QuizPageData<'a> {
    pub quiz: &'a Quiz,
    pub category: &'a Category,
    pub panel: SessionPanelData<'a>,
    pub content: Option<&'a QuizContent>,
}

pub fn quiz_page(data: QuizPageData) -> Markup {
    let quiz = data.quiz;
    html! {
        (breadcrumbs(&[
            (&*t!("nav.home"), Some(names::HOME_URL.to_string())),
            (data.category.name.as_str(), Some(names::category_url(&data.category.id))),
            (quiz.short_title(), None),
        ]))

        header."quiz-header" {
            h1 { (quiz.title) }
            p { (quiz.description) }
            @if let Some(about) = &quiz.category_description {
                p { small { (about) } }
            }
            p {
                small {
                    (t!("quiz.question_count", count = quiz.questions.len()))
                    " · "
                    (quiz.difficulty.as_str())
                }
            }
            div."tags" {
                @for label in &quiz.tags {
                    (tag(label))
                }
            }
        }

        (session_panel(data.panel))

        @if let Some(content) = data.content {
            (article(content))
        }
    }
}
