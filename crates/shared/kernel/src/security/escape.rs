//! HTML entity escaping.
//!
//! The single escaping policy used by every markup emitter in the workspace.
//! Escaping is a plain character map over the five characters with meaning in
//! HTML text and attribute positions; existing entities are double-encoded
//! (`&#8230;` becomes `&amp;#8230;`), matching the strict policy of treating
//! all input as untrusted text.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for safe interpolation into HTML.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping, which
/// is the common case for template content.
///
/// # Example
/// ```rust
/// use trellis_kernel::security::escape::escape_html;
///
/// assert_eq!(escape_html("Next >"), "Next &gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(needs_escape) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    for ch in input[first..].chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

const fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_when_clean() {
        assert!(matches!(escape_html("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn double_encodes_existing_entities() {
        assert_eq!(escape_html("to escape &#8230; or not"), "to escape &amp;#8230; or not");
    }

    #[test]
    fn escapes_all_significant_characters() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
