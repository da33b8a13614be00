use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    models::{Category, Quiz},
    names,
    store::ContentStore,
    views::components::{self, nav_link},
};

pub fn category_card(category: &Category, quiz_count: usize) -> Markup {
    html! {
        article."category-card" data-color=(category.color) {
            header {
                span."category-icon" aria-hidden="true" { (category.icon) }
                h3 { (nav_link(&names::category_url(&category.id), html! { (category.name) })) }
            }
            p { (category.description) }
            footer {
                small { (t!("category.quiz_count", count = quiz_count)) }
            }
        }
    }
}

pub fn quiz_card(quiz: &Quiz) -> Markup {
    html! {
        article."quiz-card" {
            h3 { (nav_link(&names::quiz_page_url(&quiz.id), html! { (quiz.short_title()) })) }
            p { (quiz.description) }
            footer {
                small {
                    (t!("quiz.question_count", count = quiz.questions.len()))
                    " · "
                    (quiz.difficulty.as_str())
                }
                div."tags" {
                    @for tag in &quiz.tags {
                        (components::tag(tag))
                    }
                }
            }
        }
    }
}

pub fn home(store: &ContentStore) -> Markup {
    html! {
        section."hero" {
            h1 { (t!("home.title")) }
            p { (t!("home.subtitle")) }
            (nav_link(names::CATEGORIES_URL, html! { (t!("home.browse")) }))
        }

        section."featured" {
            h2 { (t!("home.featured")) }
            div."grid" {
                @for category in store.featured_categories() {
                    (category_card(category, store.quiz_count(&category.id)))
                }
            }
        }

        @if !store.trending().is_empty() {
            section."trending" {
                h2 { (t!("home.trending")) }
                ul {
                    @for quiz in store.trending() {
                        li {
                            (nav_link(&names::quiz_page_url(&quiz.id), html! { (quiz.title) }))
                            small {
                                " "
                                (t!("home.trending_meta",
                                    participants = quiz.participants,
                                    minutes = quiz.duration,
                                    difficulty = quiz.difficulty.as_str()))
                            }
                        }
                    }
                }
            }
        }

        @if let Some(stats) = store.stats() {
            section."stats" {
                dl {
                    dt { (t!("stats.active_users")) } dd { (stats.active_users) }
                    dt { (t!("stats.total_quizzes")) } dd { (stats.total_quizzes) }
                    dt { (t!("stats.categories")) } dd { (stats.categories) }
                    dt { (t!("stats.user_rating")) } dd { (stats.user_rating) }
                }
            }
        }
    }
}

pub fn categories(store: &ContentStore) -> Markup {
    html! {
        h1 { (t!("categories.title")) }
        p { (t!("categories.subtitle")) }
        div."grid" {
            @for category in store.categories() {
                div {
                    (category_card(category, store.quiz_count(&category.id)))
                    @let subcategories: Vec<_> = store.subcategories_of(&category.id).collect();
                    @if !subcategories.is_empty() {
                        ul."subcategories" {
                            @for sub in subcategories {
                                li { (sub.name) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn all_topics(store: &ContentStore) -> Markup {
    let all_tags = store.all_tags();
    html! {
        h1 { (t!("topics.title")) }
        p { (t!("topics.subtitle", count = all_tags.len())) }

        section."all-tags" {
            @for tag in &all_tags {
                (components::tag(tag))
            }
        }

        @for (category_id, tags) in store.tags_by_category() {
            section."category-tags" {
                @let name = store
                    .category(category_id)
                    .map(|c| c.name.as_str())
                    .unwrap_or(category_id);
                h2 { (nav_link(&names::category_url(category_id), html! { (name) })) }
                @for tag in tags {
                    (nav_link(&names::category_tag_url(category_id, tag), components::tag(tag)))
                }
            }
        }
    }
}

pub fn about() -> Markup {
    html! {
        h1 { (t!("about.title")) }
        p { (t!("about.intro")) }
        p { (t!("about.how")) }
        p { (t!("about.privacy")) }
    }
}
