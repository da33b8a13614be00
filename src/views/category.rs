use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    classify,
    models::{Category, Quiz},
    names,
    views::{
        components::{breadcrumbs, nav_link},
        homepage::quiz_card,
    },
};

pub struct CategoryPageData<'a> {
    pub category: &'a Category,
    /// Distinct tags across the whole category, for the filter bar.
    pub tags: Vec<&'a str>,
    pub quizzes: Vec<&'a Quiz>,
    pub total_quizzes: usize,
    pub active_tag: Option<&'a str>,
    pub search: Option<&'a str>,
}

fn filter_bar(data: &CategoryPageData) -> Markup {
    let category_url = names::category_url(&data.category.id);
    html! {
        nav."filters" {
            @if data.active_tag.is_none() {
                span."tag active" { (t!("category.all")) }
            } @else {
                (nav_link(&category_url, html! { span."tag" { (t!("category.all")) } }))
            }
            @for tag in &data.tags {
                @if data.active_tag == Some(*tag) {
                    span."tag active" { (tag) }
                } @else {
                    (nav_link(&names::category_tag_url(&data.category.id, tag), html! { span."tag" { (tag) } }))
                }
            }
        }

        form."search" role="search"
             action=(category_url)
             hx-get=(category_url)
             hx-target="main"
             hx-push-url="true" {
            @if let Some(tag) = data.active_tag {
                input type="hidden" name="tag" value=(tag);
            }
            input type="search"
                  name="search"
                  value=[data.search]
                  placeholder=(t!("category.search_placeholder"))
                  aria-label=(t!("category.search_placeholder"));
            button type="submit" { (t!("category.search")) }
        }
    }
}

pub fn category(data: CategoryPageData) -> Markup {
    html! {
        (breadcrumbs(&[
            (&*t!("nav.home"), Some(names::HOME_URL.to_string())),
            (&*t!("nav.categories"), Some(names::CATEGORIES_URL.to_string())),
            (data.category.name.as_str(), None),
        ]))

        h1 { (t!("category.heading", name = data.category.name.as_str())) }
        p { (data.category.description) }
        p { small { (t!("category.quiz_count", count = data.total_quizzes)) } }

        (filter_bar(&data))

        @if data.quizzes.is_empty() {
            p."empty" { (t!("category.no_matches")) }
        } @else {
            div."grid" {
                @for quiz in &data.quizzes {
                    div {
                        small."subcategory" { (classify::subcategory_label(quiz)) }
                        (quiz_card(quiz))
                    }
                }
            }
        }
    }
}
