//! # Inline Tokenization
//!
//! Converts a run of raw text into an ordered sequence of typed
//! [`TextSpan`]s through a fixed pipeline of passes:
//!
//! 1. image extraction (`![alt](url)`)
//! 2. link extraction (`[text](url)`)
//! 3. bold split on `**`
//! 4. italic split on `_`
//! 5. code split on `` ` ``
//!
//! Link and image extraction runs before any delimiter split so that
//! delimiter characters inside URLs or alt text are never mistaken for
//! emphasis markers. Each pass only re-splits spans still tagged `Plain`;
//! everything else is opaque to later passes.
//!
//! Delimiters are flat toggles with no nesting: bold-inside-italic is not
//! distinguished from an italic span containing literal `*` characters.

pub mod extract;
pub mod split;
pub mod types;

pub use types::{SpanKind, TextSpan};

use thiserror::Error;

/// Two-character bold delimiter.
pub const BOLD: &str = "**";
/// Italic delimiter.
pub const ITALIC: &str = "_";
/// Inline code delimiter.
pub const CODE: &str = "`";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unmatched delimiter {delimiter:?} in text: {text}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// Tokenizes inline text into typed spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, TokenizeError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = extract::split_spans_image(spans);
    let spans = extract::split_spans_link(spans);
    let spans = split::split_spans_on_delimiter(spans, BOLD, SpanKind::Bold)?;
    let spans = split::split_spans_on_delimiter(spans, ITALIC, SpanKind::Italic)?;
    split::split_spans_on_delimiter(spans, CODE, SpanKind::Code)
}
