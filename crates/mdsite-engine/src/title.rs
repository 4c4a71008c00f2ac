use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("no level-1 heading found")]
    MissingTitle,
}

/// Returns the text of the first line that, after trimming, starts with
/// exactly `"# "`. Headings of level 2 and deeper never match; the caller
/// decides whether a document without a title is fatal.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(TitleError::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let md = "
        #   Hello World

        Some paragraph
        ";
        assert_eq!(extract_title(md).unwrap(), "Hello World");
    }

    #[test]
    fn first_level_one_heading_wins() {
        let md = "
        Some intro
        # My Title
        ## Subtitle
        # Another Title
        ";
        assert_eq!(extract_title(md).unwrap(), "My Title");
    }

    #[test]
    fn deeper_headings_never_match() {
        let md = "## No H1 here\nParagraph";
        assert_eq!(extract_title(md), Err(TitleError::MissingTitle));
    }

    #[test]
    fn empty_document_has_no_title() {
        assert_eq!(extract_title(""), Err(TitleError::MissingTitle));
    }
}
