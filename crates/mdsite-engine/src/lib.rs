//! Markdown parsing and HTML rendering core.
//!
//! A pure, I/O-free pipeline: a document is split into blocks, each block is
//! classified and built into a typed HTML node, and block text runs through
//! the inline tokenizer on the way. The same input always yields the same
//! tree; all errors are local to one document and surface synchronously.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod render;
pub mod title;

// Re-export key types for easier usage
pub use blocks::{BlockType, classify, split_into_blocks};
pub use html::{HtmlError, HtmlNode};
pub use inline::{SpanKind, TextSpan, TokenizeError, tokenize};
pub use render::{RenderError, render_document};
pub use title::{TitleError, extract_title};
