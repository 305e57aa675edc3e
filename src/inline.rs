use std::sync::LazyLock;

use regex::Regex;

use crate::error::MarkdownError;
use crate::span::{Span, SpanRole};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Tokenize inline markdown into a flat sequence of spans.
///
/// Delimiter passes run in a fixed order (`*` italic, `**` bold, `` ` ``
/// code), then image and link syntax is extracted from the remaining plain
/// text. The concatenated text of the output always accounts for every
/// character of the input.
pub fn tokenize(text: &str) -> Result<Vec<Span>, MarkdownError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut spans = vec![Span::plain(text)];
    spans = split_delimiter(spans, "*", SpanRole::Italic)?;
    spans = split_delimiter(spans, "**", SpanRole::Bold)?;
    spans = split_delimiter(spans, "`", SpanRole::Code)?;
    Ok(split_images_and_links(spans))
}

/// Split every plain span at paired occurrences of `delimiter`, tagging the
/// enclosed runs with `role`. Already-typed spans pass through untouched.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    role: SpanRole,
) -> Result<Vec<Span>, MarkdownError> {
    let mut out = Vec::new();
    for span in spans {
        if span.role != SpanRole::Plain {
            out.push(span);
            continue;
        }
        // Even segments sit outside the delimiters, odd segments inside.
        // Empty segments (leading delimiter, back-to-back typed runs) are
        // dropped.
        for (i, segment) in split_segments(&span.text, delimiter)?
            .into_iter()
            .enumerate()
        {
            if segment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::plain(segment));
            } else {
                out.push(Span::styled(segment, role));
            }
        }
    }
    Ok(out)
}

/// Cut `text` at each occurrence of `delimiter`, keeping the segments
/// between the cuts. An odd number of cuts means an unmatched delimiter.
///
/// During the `*` pass a `**` pair is literal text owed to the later bold
/// pass, never two empty italic delimiters.
fn split_segments(text: &str, delimiter: &str) -> Result<Vec<String>, MarkdownError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    let mut i = 0usize;
    while i < text.len() {
        let rest = &text[i..];
        if delimiter == "*" && rest.starts_with("**") {
            current.push_str("**");
            i += 2;
        } else if rest.starts_with(delimiter) {
            segments.push(std::mem::take(&mut current));
            count += 1;
            i += delimiter.len();
        } else {
            match rest.chars().next() {
                Some(ch) => {
                    current.push(ch);
                    i += ch.len_utf8();
                }
                None => break,
            }
        }
    }
    segments.push(current);

    if count % 2 != 0 {
        return Err(MarkdownError::UnmatchedDelimiter {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        });
    }
    Ok(segments)
}

struct InlineMatch {
    start: usize,
    end: usize,
    span: Span,
}

/// Extract `![alt](url)` and `[text](url)` syntax from plain spans. The two
/// matchers run independently, so matches are sorted by start offset before
/// the text is sliced at their boundaries.
fn split_images_and_links(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::new();
    for span in spans {
        if span.role != SpanRole::Plain {
            out.push(span);
            continue;
        }
        let mut matches = collect_matches(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }
        matches.sort_by_key(|m| m.start);

        let text = &span.text;
        let mut last = 0;
        for m in matches {
            if m.start > last {
                out.push(Span::plain(&text[last..m.start]));
            }
            out.push(m.span);
            last = m.end;
        }
        if last < text.len() {
            out.push(Span::plain(&text[last..]));
        }
    }
    out
}

fn collect_matches(text: &str) -> Vec<InlineMatch> {
    let mut matches = Vec::new();
    for caps in IMAGE_RE.captures_iter(text) {
        let whole = caps.get(0).expect("whole match");
        matches.push(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            span: Span::image(&caps[1], &caps[2]),
        });
    }
    for caps in LINK_RE.captures_iter(text) {
        let whole = caps.get(0).expect("whole match");
        // A `[` directly preceded by `!` belongs to an image, not a link.
        if whole.start() > 0 && text.as_bytes()[whole.start() - 1] == b'!' {
            continue;
        }
        matches.push(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            span: Span::link(&caps[1], &caps[2]),
        });
    }
    matches
}
