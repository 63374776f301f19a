//! Make server-provided text safe to draw.
//!
//! Titles, abstracts and suggestions come from the network. Control
//! characters in them could move the cursor or restyle the terminal, so
//! they are replaced before anything reaches a widget.

use std::borrow::Cow;

/// Replace control characters (newlines and tabs included) with spaces.
///
/// Borrows when nothing needs replacing.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|ch| if ch.is_control() { ' ' } else { ch })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(sanitize("spike protein"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_sequences_are_neutralized() {
        assert_eq!(sanitize("title\x1b[2J\nnext"), "title [2J next");
    }

    #[test]
    fn markup_is_kept_as_literal_text() {
        assert_eq!(sanitize("<b>bold</b>"), "<b>bold</b>");
    }
}
