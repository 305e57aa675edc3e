/// Semantic role of a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanRole {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text tagged with a semantic role.
///
/// `target` is the href for `Link` and the src for `Image`; for `Image` the
/// `text` field doubles as the alt text. All other roles leave it `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: SpanRole,
    pub target: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: SpanRole::Plain,
            target: None,
        }
    }

    pub fn styled(text: impl Into<String>, role: SpanRole) -> Self {
        Self {
            text: text.into(),
            role,
            target: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: SpanRole::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            role: SpanRole::Image,
            target: Some(url.into()),
        }
    }
}
