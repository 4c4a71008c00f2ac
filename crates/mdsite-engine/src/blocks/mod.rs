//! # Block Segmentation
//!
//! Partitions a document into blocks separated by blank lines and assigns
//! each block a structural type via prefix rules, checked in order with
//! first match winning. Classification is total: anything that matches no
//! rule is a paragraph.

use std::sync::OnceLock;

use regex::Regex;

/// The structural type of one document block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading,
    Paragraph,
    Quote,
    UnorderedList,
    OrderedList,
    Code,
}

/// `#` through `######`, each followed by a space.
const HEADING_PREFIXES: [&str; 6] = ["# ", "## ", "### ", "#### ", "##### ", "###### "];

/// Blockquote line prefix.
pub const QUOTE_PREFIX: char = '>';

/// Unordered list item prefix.
pub const UNORDERED_ITEM_PREFIX: &str = "- ";

/// The triple-backtick marker delimiting a code block.
pub const FENCE: &str = "```";

fn ordered_item_regex() -> &'static Regex {
    static ORDERED_ITEM: OnceLock<Regex> = OnceLock::new();
    ORDERED_ITEM.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid ordered item regex"))
}

/// Splits a document on blank-line separators into trimmed, non-empty
/// blocks. Block order and interior line content are preserved; only the
/// leading/trailing whitespace of each block as a whole is trimmed.
pub fn split_into_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(String::from)
        .collect()
}

/// Classifies a block by its prefix. Ordered-list numbering is not
/// validated; any block whose first line matches digit-dot-space qualifies.
pub fn classify(block: &str) -> BlockType {
    if HEADING_PREFIXES.iter().any(|p| block.starts_with(p)) {
        BlockType::Heading
    } else if block.starts_with(QUOTE_PREFIX) {
        BlockType::Quote
    } else if ordered_item_regex().is_match(block) {
        BlockType::OrderedList
    } else if block.starts_with(UNORDERED_ITEM_PREFIX) {
        BlockType::UnorderedList
    } else if block.starts_with(FENCE) && block.ends_with(FENCE) {
        BlockType::Code
    } else {
        BlockType::Paragraph
    }
}
