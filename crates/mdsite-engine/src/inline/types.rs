/// The kind of an inline text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One typed, contiguous run of inline text.
///
/// `url` is present only for `Link` and `Image` spans; for those, `text` is
/// the display/alt text. Equality covers all three fields, so a span with an
/// absent url never equals one with an empty url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    pub fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        TextSpan {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_spans_compare_equal() {
        let a = TextSpan::link("example", "https://example.com");
        let b = TextSpan::link("example", "https://example.com");
        assert_eq!(a, b);
    }

    #[test]
    fn url_absence_matters_for_equality() {
        let absent = TextSpan::plain("text");
        let empty = TextSpan {
            kind: SpanKind::Plain,
            text: "text".to_string(),
            url: Some(String::new()),
        };
        assert_ne!(absent, empty);
    }

    #[test]
    fn differing_kinds_compare_unequal() {
        assert_ne!(
            TextSpan::plain("text"),
            TextSpan::styled(SpanKind::Bold, "text")
        );
    }
}
