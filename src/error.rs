/// Errors raised while compiling a markdown document.
///
/// All of these are fatal for the whole document: the pipeline surfaces the
/// offending block or span instead of emitting partial output.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("unmatched delimiter '{delimiter}' in: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },
    #[error("malformed heading: {0}")]
    MalformedHeading(String),
    #[error("malformed code fence: {0}")]
    MalformedCodeFence(String),
    #[error("invalid node construction: {0}")]
    InvalidNode(String),
    #[error("document contains no blocks")]
    EmptyDocument,
}
