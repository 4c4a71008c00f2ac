use std::sync::OnceLock;

use regex::Regex;

use super::types::{SpanKind, TextSpan};

fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid image regex")
    })
}

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid link regex"))
}

/// Replaces every `![alt](url)` occurrence in plain spans with an `Image`
/// span, emitting the text between matches as plain spans. Spans without a
/// match pass through untouched.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, image_regex(), SpanKind::Image)
}

/// Same as [`split_spans_image`] for `[text](url)`, producing `Link` spans.
/// A match immediately preceded by `!` is an image, not a link, and is
/// skipped. The original pattern used a `(?<!!)` lookbehind; `regex` has no
/// lookbehind, so the preceding byte is checked instead.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, link_regex(), SpanKind::Link)
}

fn split_spans_matching(spans: Vec<TextSpan>, pattern: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::new();

    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }

        let mut pieces = Vec::new();
        let mut last = 0;
        for caps in pattern.captures_iter(&span.text) {
            let (Some(m), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };
            // An image match reached through the link pattern starts one byte
            // after its `!`.
            if m.start() > 0 && span.text.as_bytes()[m.start() - 1] == b'!' {
                continue;
            }
            if m.start() > last {
                pieces.push(TextSpan::plain(&span.text[last..m.start()]));
            }
            pieces.push(TextSpan {
                kind,
                text: text.as_str().to_string(),
                url: Some(url.as_str().to_string()),
            });
            last = m.end();
        }

        if pieces.is_empty() {
            out.push(span);
            continue;
        }
        if last < span.text.len() {
            pieces.push(TextSpan::plain(&span.text[last..]));
        }
        out.extend(pieces);
    }

    out
}
