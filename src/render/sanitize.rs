use std::collections::{HashMap, HashSet};

const ALLOWED_TAGS: &[&str] = &[
    "article", "section", "header", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr",
    "ul", "ol", "li", "strong", "em", "b", "i", "u", "blockquote", "code", "pre", "span", "div",
    "a", "table", "caption", "thead", "tbody", "tfoot", "tr", "th", "td", "figure", "figcaption",
    "dl", "dt", "dd", "small", "sup", "sub",
];

/// Cleans pre-rendered article markup against a fixed allow-list: structural
/// and text tags, tables, links and the `class` attribute. Scripts, styles,
/// event handlers and every other attribute are dropped.
pub fn sanitize_html(html: &str) -> String {
    let tag_attributes = HashMap::from([
        ("a", HashSet::from(["href", "title"])),
        ("th", HashSet::from(["colspan", "rowspan", "scope"])),
        ("td", HashSet::from(["colspan", "rowspan"])),
    ]);

    ammonia::Builder::default()
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(tag_attributes)
        .generic_attributes(HashSet::from(["class"]))
        .url_schemes(HashSet::from(["http", "https", "mailto"]))
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}
