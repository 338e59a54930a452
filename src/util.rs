//! Small text helpers

/// Escape the five HTML metacharacters.
///
/// `None` yields an empty string.
pub fn escape_html(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_none_is_empty() {
        assert_eq!(escape_html(None), "");
    }

    #[test]
    fn test_escape_tag() {
        assert_eq!(escape_html(Some("<b>")), "&lt;b&gt;");
    }

    #[test]
    fn test_escape_all_metacharacters() {
        assert_eq!(
            escape_html(Some(r#"a & b < "c" > 'd'"#)),
            "a &amp; b &lt; &quot;c&quot; &gt; &#39;d&#39;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html(Some("账号 user@example.com")), "账号 user@example.com");
        assert_eq!(escape_html(Some("")), "");
    }
}
