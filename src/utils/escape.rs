//! HTML escaping primitive.
//!
//! Leaf dependency of the markdown renderer; its output is considered
//! sufficient sanitization for direct injection into the chat surface, so
//! callers must not escape again.

/// Escape text for direct injection into HTML markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("plain text, no markup"), "plain text, no markup");
    }

    #[test]
    fn already_escaped_entities_are_escaped_again() {
        // Escaping is not idempotent; double-encoding is the caller's bug.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
