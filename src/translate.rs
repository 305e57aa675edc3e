use crate::block::{BlockKind, classify};
use crate::error::MarkdownError;
use crate::html::HtmlNode;
use crate::inline;
use crate::span::{Span, SpanRole};

/// Translate one segmented block into its root HTML node.
pub fn translate(block: &str) -> Result<HtmlNode, MarkdownError> {
    match classify(block) {
        BlockKind::Heading => heading(block),
        BlockKind::Code => code(block),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList => list(block, false),
        BlockKind::OrderedList => list(block, true),
        BlockKind::Paragraph => paragraph(block),
    }
}

/// Tokenize inline content and map each span to a node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(inline::tokenize(text)?.iter().map(span_to_node).collect())
}

fn span_to_node(span: &Span) -> HtmlNode {
    let target = || span.target.clone().unwrap_or_default();
    match span.role {
        SpanRole::Plain => HtmlNode::text(&span.text),
        SpanRole::Bold => HtmlNode::leaf("b", &span.text),
        SpanRole::Italic => HtmlNode::leaf("i", &span.text),
        SpanRole::Code => HtmlNode::leaf("code", &span.text),
        SpanRole::Link => HtmlNode::leaf_with_attrs(
            "a",
            &span.text,
            vec![("href".to_string(), target())],
        ),
        SpanRole::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), target()),
                ("alt".to_string(), span.text.clone()),
            ],
        ),
    }
}

fn heading(block: &str) -> Result<HtmlNode, MarkdownError> {
    let level = block.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return Err(MarkdownError::MalformedHeading(block.to_string()));
    }
    let text = block[level..]
        .strip_prefix(' ')
        .ok_or_else(|| MarkdownError::MalformedHeading(block.to_string()))?;
    HtmlNode::container(format!("h{level}"), inline_children(text)?)
}

fn code(block: &str) -> Result<HtmlNode, MarkdownError> {
    let lines: Vec<&str> = block.lines().collect();
    if lines.len() < 2 || lines[lines.len() - 1] != "```" {
        return Err(MarkdownError::MalformedCodeFence(block.to_string()));
    }
    let language = lines[0]
        .strip_prefix("```")
        .ok_or_else(|| MarkdownError::MalformedCodeFence(block.to_string()))?
        .trim();
    // The body is verbatim: no inline tokenization inside code.
    let body = lines[1..lines.len() - 1].join("\n");
    let code_node = HtmlNode::leaf_with_attrs(
        "code",
        body,
        vec![("class".to_string(), language.to_string())],
    );
    HtmlNode::container("pre", vec![code_node])
}

fn quote(block: &str) -> Result<HtmlNode, MarkdownError> {
    let text = block
        .lines()
        .map(|line| {
            // The marker is two characters, not two bytes.
            let mut chars = line.chars();
            chars.next();
            chars.next();
            chars.as_str()
        })
        .collect::<Vec<_>>()
        .join("\n");
    // Spans go directly under the blockquote, no intermediate paragraph.
    HtmlNode::container("blockquote", inline_children(&text)?)
}

fn list(block: &str, ordered: bool) -> Result<HtmlNode, MarkdownError> {
    let mut items = Vec::new();
    for (i, line) in block.lines().enumerate() {
        let marker_len = if ordered {
            format!("{}. ", i + 1).len()
        } else {
            2
        };
        let rest = line.get(marker_len..).unwrap_or("").trim();
        items.push(HtmlNode::container("li", inline_children(rest)?)?);
    }
    HtmlNode::container(if ordered { "ol" } else { "ul" }, items)
}

fn paragraph(block: &str) -> Result<HtmlNode, MarkdownError> {
    HtmlNode::container("p", inline_children(block)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_map_to_hn_tags() {
        for level in 1..=6 {
            let block = format!("{} X", "#".repeat(level));
            let node = translate(&block).unwrap();
            assert_eq!(node.render(), format!("<h{level}>X</h{level}>"));
        }
    }

    #[test]
    fn heading_with_inline_markup() {
        assert_eq!(
            translate("## A **bold** move").unwrap().render(),
            "<h2>A <b>bold</b> move</h2>"
        );
    }

    #[test]
    fn malformed_headings_are_errors() {
        assert!(matches!(
            translate("####### too deep"),
            Err(MarkdownError::MalformedHeading(_))
        ));
        assert!(matches!(
            translate("#nospace"),
            Err(MarkdownError::MalformedHeading(_))
        ));
    }

    #[test]
    fn code_block_body_is_verbatim() {
        assert_eq!(
            translate("```rust\nlet x = *ptr;\nlet y = 2;\n```")
                .unwrap()
                .render(),
            "<pre><code class=\"rust\">let x = *ptr;\nlet y = 2;</code></pre>"
        );
    }

    #[test]
    fn code_block_without_language_gets_empty_class() {
        assert_eq!(
            translate("```\nplain code\n```").unwrap().render(),
            "<pre><code class=\"\">plain code</code></pre>"
        );
    }

    #[test]
    fn code_block_with_stray_closing_fence_is_an_error() {
        assert!(matches!(
            translate("```\ncode\n``` trailing"),
            Err(MarkdownError::MalformedCodeFence(_))
        ));
    }

    #[test]
    fn quote_children_sit_directly_under_blockquote() {
        assert_eq!(
            translate("> quoted *words*\n> second line").unwrap().render(),
            "<blockquote>quoted <i>words</i>\nsecond line</blockquote>"
        );
    }

    #[test]
    fn quote_marker_strip_counts_characters_not_bytes() {
        assert_eq!(
            translate(">é text").unwrap().render(),
            "<blockquote> text</blockquote>"
        );
        assert_eq!(
            translate("> first\n>— second").unwrap().render(),
            "<blockquote>first\n second</blockquote>"
        );
    }

    #[test]
    fn unordered_list_has_one_li_per_line() {
        let node = translate("- one\n- two\n* three").unwrap();
        assert_eq!(
            node.render(),
            "<ul><li>one</li><li>two</li><li>three</li></ul>"
        );
        if let HtmlNode::Container { children, .. } = node {
            assert_eq!(children.len(), 3);
        } else {
            panic!("expected container");
        }
    }

    #[test]
    fn ordered_list_strips_numeric_markers() {
        assert_eq!(
            translate("1. first\n2. second").unwrap().render(),
            "<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn paragraph_preserves_embedded_newlines() {
        assert_eq!(
            translate("line one\nline two").unwrap().render(),
            "<p>line one\nline two</p>"
        );
    }

    #[test]
    fn link_and_image_nodes() {
        assert_eq!(
            translate("See ![Alt](img.jpg) now").unwrap().render(),
            "<p>See <img src=\"img.jpg\" alt=\"Alt\"> now</p>"
        );
        assert_eq!(
            translate("go [home](/index.html)").unwrap().render(),
            "<p>go <a href=\"/index.html\">home</a></p>"
        );
    }

    #[test]
    fn tokenizer_errors_propagate() {
        assert!(matches!(
            translate("an *unmatched delimiter"),
            Err(MarkdownError::UnmatchedDelimiter { .. })
        ));
    }
}
