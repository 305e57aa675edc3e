mod block;
mod config;
mod error;
mod html;
mod inline;
mod site;
mod span;
mod translate;

pub use block::{BlockKind, classify, segment};
pub use config::Config;
pub use error::MarkdownError;
pub use html::HtmlNode;
pub use site::{BuildOptions, SiteError, build_site, copy_dir, extract_title, generate_page};
pub use span::{Span, SpanRole};

/// Tokenize inline markdown into spans.
pub fn tokenize(text: &str) -> Result<Vec<Span>, MarkdownError> {
    inline::tokenize(text)
}

/// Translate one block into its root HTML node.
pub fn translate(block: &str) -> Result<HtmlNode, MarkdownError> {
    translate::translate(block)
}

/// Convert a whole markdown document to an HTML string.
///
/// Blocks become children of a single root `div`. An empty document is an
/// error: there is no partial or placeholder output.
pub fn render_document(markdown: &str) -> Result<String, MarkdownError> {
    let blocks = segment(markdown);
    if blocks.is_empty() {
        return Err(MarkdownError::EmptyDocument);
    }
    let mut children = Vec::with_capacity(blocks.len());
    for block in &blocks {
        children.push(translate::translate(block)?);
    }
    Ok(HtmlNode::container("div", children)?.render())
}
