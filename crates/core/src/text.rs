use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("<[^>]*>").expect("valid tag regex"));

/// Reduce an HTML fragment to plain text by removing all `<...>` tag
/// sequences.
///
/// This is a plain-text reduction only: no entity decoding, no whitespace
/// normalization. Text outside tags is preserved verbatim.
pub fn html_to_plain_text(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_tags() {
        assert_eq!(html_to_plain_text("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(html_to_plain_text("just text"), "just text");
    }

    #[test]
    fn strips_tags_with_attributes() {
        assert_eq!(
            html_to_plain_text(r#"<a href="https://example.com">link</a>"#),
            "link"
        );
    }

    #[test]
    fn entities_are_not_decoded() {
        assert_eq!(html_to_plain_text("<p>a &amp; b</p>"), "a &amp; b");
    }

    #[test]
    fn unclosed_angle_bracket_is_preserved() {
        // Without a closing `>` there is no tag sequence to remove.
        assert_eq!(html_to_plain_text("1 < 2"), "1 < 2");
    }

    #[test]
    fn empty_input() {
        assert_eq!(html_to_plain_text(""), "");
    }
}
