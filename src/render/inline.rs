/// One formatted span of body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Run {
    Plain(String),
    /// `*text*`
    Emphasis(String),
    /// `**text**`
    Strong(String),
}

impl Run {
    pub fn text(&self) -> &str {
        match self {
            Run::Plain(t) | Run::Emphasis(t) | Run::Strong(t) => t,
        }
    }
}

/// Splits `text` into runs. Single-asterisk italics are resolved first, then
/// double-asterisk bold inside what is left, so `**a** and *b*` keeps both.
pub fn runs(text: &str) -> Vec<Run> {
    let mut out = Vec::new();
    let mut last = 0;

    for (start, end) in italic_spans(text) {
        push_bold_segments(&mut out, &text[last..start]);
        out.push(Run::Emphasis(text[start + 1..end].to_string()));
        last = end + 1;
    }
    push_bold_segments(&mut out, &text[last..]);

    out
}

/// Byte offsets of `*` pairs that open and close an italic span. Neither
/// marker may touch another `*`, and the span is non-empty.
fn italic_spans(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let is_star = |i: usize| bytes.get(i) == Some(&b'*');
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let lone = bytes[i] == b'*' && !(i > 0 && is_star(i - 1)) && !is_star(i + 1);
        if lone {
            if let Some(rel) = text[i + 1..].find('*') {
                let close = i + 1 + rel;
                if close > i + 1 && !is_star(close + 1) {
                    spans.push((i, close));
                    i = close + 1;
                    continue;
                }
            }
        }
        i += 1;
    }
    spans
}

fn push_bold_segments(out: &mut Vec<Run>, text: &str) {
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        let inner = &after[..close];
        if inner.is_empty() || inner.contains('*') {
            push_plain(out, &rest[..open + 2]);
            rest = after;
            continue;
        }
        push_plain(out, &rest[..open]);
        out.push(Run::Strong(inner.to_string()));
        rest = &after[close + 2..];
    }
    push_plain(out, rest);
}

fn push_plain(out: &mut Vec<Run>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Run::Plain(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Run::Plain(text.to_string()));
    }
}
