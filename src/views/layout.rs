use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, seo::PageMeta, utils, views::components::nav_link};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_SRC) {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/icon.svg" type="image/svg+xml" {}
    }
}

fn meta_tags(meta: &PageMeta) -> Markup {
    html! {
        title { (meta.title) }
        meta name="description" content=(meta.description);
        @if !meta.keywords.is_empty() {
            meta name="keywords" content=(meta.keywords.join(", "));
        }
        meta name="robots" content=(meta.robots);
        @if let Some(canonical) = &meta.canonical {
            link rel="canonical" href=(canonical);
        }
        @if let Some(og) = &meta.open_graph {
            meta property="og:type" content="website";
            meta property="og:title" content=(og.title);
            meta property="og:description" content=(og.description);
            meta property="og:url" content=(og.url);
            meta property="og:site_name" content=(og.site_name);
        }
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."brand" {
                        (nav_link(names::HOME_URL, html! { strong { (t!("site.brand")) } }))
                    }
                }
                ul {
                    li { (nav_link(names::CATEGORIES_URL, html! { (t!("nav.categories")) })) }
                    li { (nav_link(names::ALL_TOPICS_URL, html! { (t!("nav.all_topics")) })) }
                    li { (nav_link(names::ABOUT_URL, html! { (t!("nav.about")) })) }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            small { (t!("site.brand")) " " (utils::VERSION) }
        }
    }
}

pub fn page(meta: &PageMeta, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (meta_tags(meta))
                (css())
                (js())
                (icon())
            }

            body."container" {
                (header())
                main { (body) }
                (footer())
            }
        }
    }
}

/// Fragment for htmx swaps into `main`; htmx picks up the `title` element.
pub fn titled(meta: &PageMeta, body: Markup) -> Markup {
    html! {
        title { (meta.title) }
        (body)
    }
}

pub fn render(is_htmx: bool, meta: &PageMeta, body: Markup) -> Markup {
    if is_htmx {
        titled(meta, body)
    } else {
        page(meta, body)
    }
}
