use super::TokenizeError;
use super::types::{SpanKind, TextSpan};

/// Splits each span's text on `delimiter`, alternating segment kinds starting
/// with `Plain` (even index plain, odd index `kind`). Empty segments are
/// dropped. Non-plain spans pass through untouched.
///
/// Delimiters are flat, non-nesting toggles: an odd occurrence count within a
/// single span means an opener without a closer and fails the whole pass.
pub fn split_spans_on_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, TokenizeError> {
    let mut out = Vec::new();

    for span in spans {
        if span.text.matches(delimiter).count() % 2 != 0 {
            return Err(TokenizeError::UnmatchedDelimiter {
                delimiter,
                text: span.text,
            });
        }
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }

        for (i, part) in span.text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::styled(kind, part));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{BOLD, CODE, ITALIC};

    #[test]
    fn splits_into_alternating_spans() {
        let spans = vec![TextSpan::plain(
            "This is **bold** text with **multiple** delimiters",
        )];
        let result = split_spans_on_delimiter(spans, BOLD, SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("This is "),
                TextSpan::styled(SpanKind::Bold, "bold"),
                TextSpan::plain(" text with "),
                TextSpan::styled(SpanKind::Bold, "multiple"),
                TextSpan::plain(" delimiters"),
            ]
        );
    }

    #[test]
    fn unmatched_delimiter_fails() {
        let spans = vec![TextSpan::plain("some **bold text without a closer")];
        let err = split_spans_on_delimiter(spans, BOLD, SpanKind::Bold).unwrap_err();
        assert_eq!(
            err,
            TokenizeError::UnmatchedDelimiter {
                delimiter: BOLD,
                text: "some **bold text without a closer".to_string(),
            }
        );
    }

    #[test]
    fn foreign_delimiters_are_left_alone() {
        let spans = vec![TextSpan::plain(
            "This is **bold** text and _italic_ text with `code`",
        )];
        let result = split_spans_on_delimiter(spans, BOLD, SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("This is "),
                TextSpan::styled(SpanKind::Bold, "bold"),
                TextSpan::plain(" text and _italic_ text with `code`"),
            ]
        );
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let spans = vec![
            TextSpan::plain("before "),
            TextSpan::styled(SpanKind::Code, "a_b_c"),
        ];
        let result = split_spans_on_delimiter(spans, ITALIC, SpanKind::Italic).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("before "),
                TextSpan::styled(SpanKind::Code, "a_b_c"),
            ]
        );
    }

    #[test]
    fn leading_delimiter_drops_empty_segment() {
        let spans = vec![TextSpan::plain("`code` after")];
        let result = split_spans_on_delimiter(spans, CODE, SpanKind::Code).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::styled(SpanKind::Code, "code"),
                TextSpan::plain(" after"),
            ]
        );
    }

    #[test]
    fn consecutive_passes_compose() {
        let spans = vec![
            TextSpan::plain("This is _italic_"),
            TextSpan::plain(" and this is **bold**"),
            TextSpan::plain(" and this is `code`"),
        ];
        let spans = split_spans_on_delimiter(spans, CODE, SpanKind::Code).unwrap();
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[3], TextSpan::styled(SpanKind::Code, "code"));

        let spans = split_spans_on_delimiter(spans, ITALIC, SpanKind::Italic).unwrap();
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[1], TextSpan::styled(SpanKind::Italic, "italic"));

        let spans = split_spans_on_delimiter(spans, BOLD, SpanKind::Bold).unwrap();
        assert_eq!(spans.len(), 6);
        assert_eq!(spans[3], TextSpan::styled(SpanKind::Bold, "bold"));
        assert_eq!(spans[5], TextSpan::styled(SpanKind::Code, "code"));
    }
}
