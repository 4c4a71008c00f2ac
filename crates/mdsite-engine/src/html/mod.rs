//! # HTML Node Model
//!
//! A typed tree of renderable HTML. Two variants, pattern-matched in
//! [`HtmlNode::to_html`]:
//!
//! - **Leaf**: a terminal node carrying text. A leaf without a tag renders
//!   its raw value with no wrapping element. A leaf with a void tag (`img`,
//!   `br`, ...) renders self-closing and ignores its value.
//! - **Parent**: a composite node with ordered children, rendered
//!   depth-first, left-to-right.
//!
//! Attribute values are inserted verbatim. Callers are responsible for
//! supplying safe values.

use thiserror::Error;

/// Tags rendered without a closing tag or text content.
const VOID_TAGS: [&str; 14] = [
    "img", "br", "hr", "input", "meta", "link", "source", "track", "area", "base", "col", "embed",
    "param", "wbr",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HtmlError {
    #[error("parent node is missing a tag")]
    MissingParentTag,
    #[error("parent node <{tag}> is missing its children")]
    MissingChildren { tag: String },
    #[error("leaf node <{tag}> is missing a value")]
    MissingLeafValue { tag: String },
}

/// An HTML element tree. Owned exclusively by its parent; discarded after
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        /// `None` means "render the raw value with no wrapping element".
        tag: Option<String>,
        /// Required unless the tag is a void element.
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    Parent {
        /// Required at render time.
        tag: Option<String>,
        /// `None` (as distinct from empty) is a structural error.
        children: Option<Vec<HtmlNode>>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A bare text leaf with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: vec![],
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: vec![],
        }
    }

    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value,
            attrs,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: vec![],
        }
    }

    /// Serializes the tree to an HTML string.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                leaf_to_html(tag.as_deref(), value.as_deref(), attrs)
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_deref().ok_or(HtmlError::MissingParentTag)?;
                let children = children.as_ref().ok_or_else(|| HtmlError::MissingChildren {
                    tag: tag.to_string(),
                })?;
                let mut html = format!("<{tag}{}>", attrs_to_html(attrs));
                for child in children {
                    html.push_str(&child.to_html()?);
                }
                html.push_str(&format!("</{tag}>"));
                Ok(html)
            }
        }
    }
}

fn leaf_to_html(
    tag: Option<&str>,
    value: Option<&str>,
    attrs: &[(String, String)],
) -> Result<String, HtmlError> {
    let Some(tag) = tag else {
        // Untagged leaf: raw text, attributes ignored.
        return Ok(value.unwrap_or_default().to_string());
    };
    if VOID_TAGS.contains(&tag) {
        return Ok(format!("<{tag}{} />", attrs_to_html(attrs)));
    }
    let value = value.ok_or_else(|| HtmlError::MissingLeafValue {
        tag: tag.to_string(),
    })?;
    Ok(format!("<{tag}{}>{value}</{tag}>", attrs_to_html(attrs)))
}

/// Renders attributes as a leading-space-prefixed `name="value"` sequence in
/// insertion order, or the empty string when there are none.
fn attrs_to_html(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = attrs
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    format!(" {}", rendered.join(" "))
}
