use crate::error::MarkdownError;

/// Ordered attribute list; rendered in insertion order so output is
/// deterministic.
pub type Attrs = Vec<(String, String)>;

/// A renderable HTML tree node.
///
/// Construct-once, render-many: nodes own their children and attributes and
/// are never mutated after construction. A leaf always carries a value (the
/// empty string is valid, absence is not expressible), so the only
/// construction errors live on containers.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attrs,
    },
    Container {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// Bare text leaf, rendered verbatim with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Attrs,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    /// A container must have a tag and at least one child.
    pub fn container(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
    ) -> Result<Self, MarkdownError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(MarkdownError::InvalidNode(
                "container with empty tag".to_string(),
            ));
        }
        if children.is_empty() {
            return Err(MarkdownError::InvalidNode(format!(
                "container <{tag}> with no children"
            )));
        }
        Ok(HtmlNode::Container {
            tag,
            children,
            attrs: Vec::new(),
        })
    }

    /// Serialize the node and its subtree to an HTML string.
    ///
    /// No HTML escaping is performed; the document compiler trusts its
    /// input.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                out.push('<');
                out.push_str(tag);
                push_attrs(attrs, out);
                out.push('>');
                // img is a void element: no value, no closing tag.
                if tag != "img" {
                    out.push_str(value);
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
            HtmlNode::Container {
                tag,
                children,
                attrs,
            } => {
                out.push('<');
                out.push_str(tag);
                push_attrs(attrs, out);
                out.push('>');
                for child in children {
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn push_attrs(attrs: &Attrs, out: &mut String) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
