use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{
    models::QuizContent,
    render::{render_content, runs, sanitize_html, Block, Rendered},
    views::components::inline,
};

fn block(block: &Block) -> Markup {
    html! {
        @match block {
            Block::Heading { level: 2, text } => { h2 { (text) } }
            Block::Heading { level: 3, text } => { h3 { (text) } }
            Block::Heading { text, .. } => { h4 { (text) } }
            Block::List { items } => {
                ul {
                    @for item in items {
                        li { (inline(&runs(item))) }
                    }
                }
            }
            Block::Paragraph { runs } => { p { (inline(runs)) } }
        }
    }
}

/// Study article shown below the quiz. Records that failed to generate are skipped.
pub fn article(content: &QuizContent) -> Markup {
    if !content.is_successful() {
        return html! {};
    }

    html! {
        article."study" {
            header {
                h2 { (content.title) }
                @if !content.last_updated.is_empty() {
                    small { (t!("article.updated", date = content.last_updated.as_str())) }
                }
            }
            @match render_content(&content.content) {
                Rendered::Html(markup) => { (PreEscaped(markup)) }
                Rendered::Blocks(blocks) => {
                    @for b in &blocks {
                        (block(b))
                    }
                }
            }
            @if let Some(graph) = &content.knowledge_graph_html {
                section."knowledge-graph" {
                    h3 { (t!("article.knowledge_graph")) }
                    (PreEscaped(sanitize_html(graph)))
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn renders_blocks_and_sanitizes_graph() {
        let mut content = fixtures::content("solar-system", "science", "astronomy", "Planets");
        content.content = "## Orbits\n\nA *short* note.\n\n• Mercury\n• **Venus**".to_string();
        content.knowledge_graph_html = Some("<table><tr><td>Mars</td></tr></table><script>x()</script>".to_string());

        let html = article(&content).into_string();
        assert!(html.contains("<h2>Orbits</h2>"));
        assert!(html.contains("A <em>short</em> note."));
        assert!(html.contains("<li><strong>Venus</strong></li>"));
        assert!(html.contains("<td>Mars</td>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn failed_content_is_hidden() {
        let mut content = fixtures::content("solar-system", "science", "astronomy", "Planets");
        content.success = Some(false);
        assert_eq!(article(&content).into_string(), "");
    }
}
