//! # Block-to-Tree Building
//!
//! One builder per [`BlockType`], each producing a parent [`HtmlNode`].
//! Builders tokenize their text content through the inline pipeline; code
//! blocks are the one exception and keep their text verbatim.
//!
//! Errors abort the whole document. A partially rendered document risks
//! producing misleading HTML, so there is no recovery or fallback.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::blocks::{self, BlockType, classify, split_into_blocks};
use crate::html::{HtmlError, HtmlNode};
use crate::inline::{SpanKind, TextSpan, TokenizeError, tokenize};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Html(#[from] HtmlError),
}

/// Renders a whole markdown document into a single `div` node wrapping one
/// node per block.
pub fn render_document(markdown: &str) -> Result<HtmlNode, RenderError> {
    let children = split_into_blocks(markdown)
        .iter()
        .map(|block| block_to_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

fn block_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    match classify(block) {
        BlockType::Heading => heading_node(block),
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => unordered_list_node(block),
        BlockType::OrderedList => ordered_list_node(block),
        BlockType::Code => Ok(code_node(block)),
    }
}

/// Converts one text span into its HTML leaf.
fn span_to_node(span: &TextSpan) -> HtmlNode {
    let url = || span.url.clone().unwrap_or_default();
    match span.kind {
        SpanKind::Plain => HtmlNode::text(&span.text),
        SpanKind::Bold => HtmlNode::leaf("b", &span.text),
        SpanKind::Italic => HtmlNode::leaf("i", &span.text),
        SpanKind::Code => HtmlNode::leaf("code", &span.text),
        SpanKind::Link => HtmlNode::leaf_with_attrs(
            "a",
            Some(span.text.clone()),
            vec![("href".to_string(), url())],
        ),
        SpanKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            None,
            vec![
                ("src".to_string(), url()),
                ("alt".to_string(), span.text.clone()),
            ],
        ),
    }
}

fn tokenize_to_nodes(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    Ok(tokenize(text)?.iter().map(span_to_node).collect())
}

fn heading_node(block: &str) -> Result<HtmlNode, RenderError> {
    let level = block
        .chars()
        .take_while(|&c| c == '#')
        .count()
        .clamp(1, 6);
    let text = block.trim_start_matches('#').trim();
    Ok(HtmlNode::parent(
        format!("h{level}"),
        tokenize_to_nodes(text)?,
    ))
}

fn paragraph_node(block: &str) -> Result<HtmlNode, RenderError> {
    let text = joined_lines(block.lines().map(str::trim));
    Ok(HtmlNode::parent("p", tokenize_to_nodes(&text)?))
}

fn quote_node(block: &str) -> Result<HtmlNode, RenderError> {
    let text = joined_lines(block.lines().map(|line| {
        let line = line.trim();
        match line.strip_prefix(blocks::QUOTE_PREFIX) {
            // At most one space after the marker belongs to the syntax.
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }));
    Ok(HtmlNode::parent("blockquote", tokenize_to_nodes(&text)?))
}

/// Joins non-blank lines with single spaces.
fn joined_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, RenderError> {
    let items = block
        .lines()
        .filter_map(|line| line.trim().strip_prefix(blocks::UNORDERED_ITEM_PREFIX))
        .map(list_item_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_item_line_regex() -> &'static Regex {
    static ORDERED_LINE: OnceLock<Regex> = OnceLock::new();
    ORDERED_LINE
        .get_or_init(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("Invalid ordered line regex"))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, RenderError> {
    let items = block
        .lines()
        .filter_map(|line| {
            let caps = ordered_item_line_regex().captures(line.trim())?;
            caps.get(2).map(|text| text.as_str())
        })
        .map(list_item_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item_node(text: &str) -> Result<HtmlNode, RenderError> {
    Ok(HtmlNode::parent("li", tokenize_to_nodes(text)?))
}

/// Builds `<pre><code>...</code></pre>` with the fence lines stripped, the
/// common leading indentation removed, and exactly one trailing newline.
/// Code block content never passes through the inline tokenizer.
fn code_node(block: &str) -> HtmlNode {
    let mut lines: Vec<&str> = block.lines().collect();
    if lines
        .first()
        .is_some_and(|line| line.trim().starts_with(blocks::FENCE))
    {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim() == blocks::FENCE) {
        lines.pop();
    }

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or(""))
        .collect();

    let mut body = dedented.join("\n");
    while body.ends_with('\n') {
        body.pop();
    }
    body.push('\n');

    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", body)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn to_html(markdown: &str) -> String {
        render_document(markdown).unwrap().to_html().unwrap()
    }

    #[test]
    fn heading_levels_map_to_h_tags() {
        assert_eq!(to_html("# Heading 1"), "<div><h1>Heading 1</h1></div>");
        assert_eq!(to_html("### Third"), "<div><h3>Third</h3></div>");
    }

    #[test]
    fn paragraph_collapses_interior_newlines() {
        let md = "
        This is **bolded** paragraph
        text in a p
        tag here

        This is another paragraph with _italic_ text and `code` here

        ";
        assert_eq!(
            to_html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn quote_strips_markers_and_joins_lines() {
        let md = "> quoted text\n> over two lines\n>\n> and more";
        assert_eq!(
            to_html(md),
            "<div><blockquote>quoted text over two lines and more</blockquote></div>"
        );
    }

    #[test]
    fn unordered_list_builds_li_children() {
        let md = "- This is a list\n- with items";
        assert_eq!(
            to_html(md),
            "<div><ul><li>This is a list</li><li>with items</li></ul></div>"
        );
    }

    #[test]
    fn ordered_list_builds_li_children() {
        let md = "1. first\n2. second\n3. third with **bold**";
        assert_eq!(
            to_html(md),
            "<div><ol><li>first</li><li>second</li><li>third with <b>bold</b></li></ol></div>"
        );
    }

    #[test]
    fn code_block_keeps_text_verbatim() {
        let md = "
        ```
        This is text that _should_ remain
        the **same** even with inline stuff
        ```
        ";
        assert_eq!(
            to_html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn image_in_paragraph_renders_img_element() {
        assert_eq!(
            to_html("![image](https://x/y.png)"),
            "<div><p><img src=\"https://x/y.png\" alt=\"image\" /></p></div>"
        );
    }

    #[test]
    fn link_in_paragraph_renders_anchor() {
        assert_eq!(
            to_html("see [example](https://example.com) please"),
            "<div><p>see <a href=\"https://example.com\">example</a> please</p></div>"
        );
    }

    #[test]
    fn unmatched_delimiter_aborts_the_document() {
        let err = render_document("fine paragraph\n\nbroken `code span").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Tokenize(TokenizeError::UnmatchedDelimiter { .. })
        ));
    }

    #[test]
    fn rendering_is_deterministic() {
        let md = "# Title\n\nsome **bold** and a [link](https://a.b)\n\n- one\n- two";
        assert_eq!(to_html(md), to_html(md));
    }

    #[test]
    fn empty_document_renders_empty_div() {
        assert_eq!(to_html(""), "<div></div>");
    }
}
