use maud::{html, Markup};

use crate::render::Run;

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML show:window:top" {
            (body)
        }
    }
}

pub fn breadcrumbs(crumbs: &[(&str, Option<String>)]) -> Markup {
    html! {
        nav."breadcrumbs" aria-label="breadcrumb" {
            ul {
                @for (label, href) in crumbs {
                    li {
                        @match href {
                            Some(href) => { (nav_link(href, html! { (label) })) }
                            None => { span aria-current="page" { (label) } }
                        }
                    }
                }
            }
        }
    }
}

pub fn tag(text: &str) -> Markup {
    html! {
        span."tag" { (text) }
    }
}

pub fn inline(runs: &[Run]) -> Markup {
    html! {
        @for run in runs {
            @match run {
                Run::Plain(text) => { (text) }
                Run::Emphasis(text) => { em { (text) } }
                Run::Strong(text) => { strong { (text) } }
            }
        }
    }
}
