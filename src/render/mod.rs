//! Turns article text into display blocks.
//!
//! Articles come in two shapes: pre-rendered HTML, which is sanitized and
//! passed through, and a small markdown-like dialect parsed paragraph by
//! paragraph. Rendering never fails; anything unrecognised becomes a
//! paragraph.

mod inline;
mod sanitize;

pub use inline::{runs, Run};
pub use sanitize::sanitize_html;

/// Paragraphs longer than this are split at sentence boundaries.
const LONG_PARAGRAPH: usize = 400;
/// Target size of the chunks a long paragraph is split into.
const CHUNK_TARGET: usize = 350;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    List { items: Vec<String> },
    Paragraph { runs: Vec<Run> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    /// Sanitized markup, safe to emit as-is.
    Html(String),
    Blocks(Vec<Block>),
}

pub fn render_content(content: &str) -> Rendered {
    if is_html(content) {
        Rendered::Html(sanitize_html(content))
    } else {
        Rendered::Blocks(parse_blocks(content))
    }
}

pub fn is_html(content: &str) -> bool {
    content.trim_start().starts_with("<article") || content.contains("<p class=")
}

pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    for paragraph in paragraphs(content) {
        parse_paragraph(&paragraph, &mut blocks);
    }
    blocks
}

/// Splits on blank (whitespace-only) lines and trims each paragraph.
fn paragraphs(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n").trim().to_string());
    }
    out
}

fn parse_paragraph(paragraph: &str, blocks: &mut Vec<Block>) {
    if is_numbered_heading(paragraph) {
        let text = strip_bold(paragraph);
        let text = strip_numbering(text);
        blocks.push(heading(3, text));
        return;
    }

    if let Some(rest) = paragraph.strip_prefix("###") {
        blocks.push(heading(3, strip_one_space(rest)));
        return;
    }
    if let Some(rest) = paragraph.strip_prefix("##") {
        blocks.push(heading(2, strip_one_space(rest)));
        return;
    }

    if paragraph.len() > 4 && paragraph.starts_with("**") && paragraph.ends_with("**") {
        blocks.push(heading(4, strip_bold(paragraph)));
        return;
    }

    // markers only count after a line break; a leading `*` is usually italics
    if paragraph.lines().skip(1).any(|line| bullet_text(line).is_some()) {
        parse_list(paragraph, blocks);
        return;
    }

    for chunk in split_long(paragraph) {
        blocks.push(Block::Paragraph { runs: runs(&chunk) });
    }
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

/// `1. Opening` or `**2. Background**`.
fn is_numbered_heading(paragraph: &str) -> bool {
    if starts_with_numbering(paragraph) {
        return true;
    }
    paragraph.len() > 4
        && paragraph.ends_with("**")
        && paragraph
            .strip_prefix("**")
            .is_some_and(starts_with_numbering)
}

/// Digits, a dot, then at least one whitespace character.
fn starts_with_numbering(text: &str) -> bool {
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    digits > 0
        && text[digits..]
            .strip_prefix('.')
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
}

fn strip_numbering(text: &str) -> &str {
    if !starts_with_numbering(text) {
        return text;
    }
    let rest = text.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.strip_prefix('.').unwrap_or(rest).trim_start()
}

fn strip_bold(text: &str) -> &str {
    let text = text.strip_prefix("**").unwrap_or(text);
    text.strip_suffix("**").unwrap_or(text)
}

fn strip_one_space(text: &str) -> &str {
    text.strip_prefix(' ').unwrap_or(text)
}

/// Text after a `•` or lone `*` bullet marker, if the line starts with one.
fn bullet_text(line: &str) -> Option<&str> {
    let line = line.trim();
    let rest = if let Some(rest) = line.strip_prefix('•') {
        rest
    } else if line.starts_with("**") {
        return None;
    } else {
        line.strip_prefix('*')?
    };
    Some(rest.trim_start())
}

/// Each bullet starts an item, following lines continue it. Lines before the
/// first bullet are kept as an introductory paragraph.
fn parse_list(paragraph: &str, blocks: &mut Vec<Block>) {
    let mut intro: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for line in paragraph.lines() {
        let trimmed = line.trim();
        match bullet_text(trimmed) {
            Some(text) => items.push(text.to_string()),
            None => match items.last_mut() {
                Some(item) => {
                    item.push(' ');
                    item.push_str(trimmed);
                }
                None => intro.push(trimmed),
            },
        }
    }

    if !intro.is_empty() {
        blocks.push(Block::Paragraph {
            runs: runs(&intro.join("\n")),
        });
    }
    blocks.push(Block::List { items });
}

/// Splits paragraphs over `LONG_PARAGRAPH` characters into sentence groups of
/// about `CHUNK_TARGET` characters. Without sentence boundaries the paragraph
/// stays whole.
fn split_long(paragraph: &str) -> Vec<String> {
    if paragraph.chars().count() <= LONG_PARAGRAPH {
        return vec![paragraph.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences(paragraph) {
        let current_len = current.chars().count();
        if current_len > 0 && current_len + sentence.chars().count() > CHUNK_TARGET {
            chunks.push(current.trim().to_string());
            current = sentence.to_string();
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
        }
    }
    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }
    chunks
}

/// Splits after `.`, `!` or `?` wherever whitespace follows. No abbreviation handling.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            out.push(&text[start..i]);
            // swallow the whole whitespace run
            let mut next = i + c.len_utf8();
            while let Some(&(j, w)) = iter.peek() {
                if !w.is_whitespace() {
                    break;
                }
                next = j + w.len_utf8();
                iter.next();
            }
            start = next;
            prev = None;
            continue;
        }
        prev = Some(c);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Run {
        Run::Plain(s.to_string())
    }

    #[test]
    fn renders_heading_paragraph_and_list() {
        let input = "## Heading\n\nSome *italic* and **bold** text.\n\n• item one\n• item two";
        assert_eq!(
            render_content(input),
            Rendered::Blocks(vec![
                Block::Heading {
                    level: 2,
                    text: "Heading".to_string()
                },
                Block::Paragraph {
                    runs: vec![
                        plain("Some "),
                        Run::Emphasis("italic".to_string()),
                        plain(" and "),
                        Run::Strong("bold".to_string()),
                        plain(" text."),
                    ]
                },
                Block::List {
                    items: vec!["item one".to_string(), "item two".to_string()]
                },
            ])
        );
    }

    #[test]
    fn long_paragraph_without_sentences_stays_whole() {
        let text = "word ".repeat(100);
        let text = text.trim();
        assert!(text.len() > 400);

        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], Block::Paragraph { runs: vec![plain(text)] });
    }

    #[test]
    fn long_paragraph_is_split_at_sentences() {
        let sentence = format!("{}end.", "x".repeat(96));
        let text = vec![sentence.as_str(); 6].join(" ");
        assert!(text.chars().count() > 400);

        let blocks = parse_blocks(&text);
        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            let Block::Paragraph { runs } = block else {
                panic!("expected paragraph, got {block:?}");
            };
            assert!(runs[0].text().chars().count() <= CHUNK_TARGET);
            assert!(runs[0].text().ends_with("end."));
        }
    }

    #[test]
    fn short_paragraphs_are_not_split() {
        let blocks = parse_blocks("One. Two! Three?");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn numbered_paragraphs_become_headings() {
        assert_eq!(
            parse_blocks("1. Opening\n\n**2. Background**"),
            vec![
                Block::Heading {
                    level: 3,
                    text: "Opening".to_string()
                },
                Block::Heading {
                    level: 3,
                    text: "Background".to_string()
                },
            ]
        );
        // a year followed by a full stop is not numbering without a space
        assert!(matches!(parse_blocks("1969.")[0], Block::Paragraph { .. }));
    }

    #[test]
    fn hash_headings_and_bold_lines() {
        assert_eq!(
            parse_blocks("### Details\n\n**Key Facts**\n\n****"),
            vec![
                Block::Heading {
                    level: 3,
                    text: "Details".to_string()
                },
                Block::Heading {
                    level: 4,
                    text: "Key Facts".to_string()
                },
                Block::Paragraph {
                    runs: vec![plain("****")]
                },
            ]
        );
    }

    #[test]
    fn list_items_collect_continuation_lines() {
        let blocks = parse_blocks("Highlights:\n* first point\n  carries on\n• second\n**not a bullet**");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    runs: vec![plain("Highlights:")]
                },
                Block::List {
                    items: vec![
                        "first point carries on".to_string(),
                        "second **not a bullet**".to_string()
                    ]
                },
            ]
        );
    }

    #[test]
    fn leading_asterisk_is_italics_not_a_list() {
        assert_eq!(
            parse_blocks("*Note:* the planets orbit the sun."),
            vec![Block::Paragraph {
                runs: vec![
                    Run::Emphasis("Note:".to_string()),
                    plain(" the planets orbit the sun."),
                ]
            }]
        );
    }

    #[test]
    fn single_bullet_line_stays_a_paragraph() {
        assert_eq!(
            parse_blocks("• only one line"),
            vec![Block::Paragraph {
                runs: vec![plain("• only one line")]
            }]
        );
    }

    #[test]
    fn bullets_after_the_first_line_make_a_list() {
        assert_eq!(
            parse_blocks("• Mercury\n• Venus"),
            vec![Block::List {
                items: vec!["Mercury".to_string(), "Venus".to_string()]
            }]
        );
    }

    #[test]
    fn blank_lines_with_whitespace_split_paragraphs() {
        let blocks = parse_blocks("first\n   \nsecond\r\n\r\nthird");
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn html_content_is_detected_and_sanitized() {
        let input = "  <article><p class=\"lead\" onclick=\"x()\">Hi</p><script>alert(1)</script></article>";
        let Rendered::Html(html) = render_content(input) else {
            panic!("expected html");
        };
        assert!(html.contains("<p class=\"lead\">Hi</p>"));
        assert!(!html.contains("script"));
        assert!(!html.contains("onclick"));

        assert!(is_html("intro <p class=\"x\">body</p>"));
        assert!(!is_html("## Heading"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_content(""), Rendered::Blocks(Vec::new()));
    }
}
