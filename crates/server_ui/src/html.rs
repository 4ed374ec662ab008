//! Markup emission helpers shared by every component.

use std::borrow::Cow;

/// Escapes text for use in element content and double-quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// ` name="value"` with the value escaped.
pub(crate) fn attr(name: &str, value: impl AsRef<str>) -> String {
    format!(" {name}=\"{}\"", escape(value.as_ref()))
}

/// ` name="value"` when a value is present, nothing otherwise.
pub(crate) fn opt_attr(name: &str, value: Option<impl AsRef<str>>) -> String {
    value.map(|value| attr(name, value)).unwrap_or_default()
}

/// ` name` boolean attribute when `on`.
pub(crate) fn flag(name: &str, on: bool) -> String {
    if on {
        format!(" {name}")
    } else {
        String::new()
    }
}

/// Wraps already-rendered markup in a `<div>` carrying `class`.
pub(crate) fn wrap_div(class: &str, inner: &str) -> String {
    format!("<div class=\"{class}\">{inner}</div>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn escape_leaves_plain_text_borrowed() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_replaces_markup_sensitive_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn attribute_helpers_skip_absent_values() {
        assert_eq!(attr("href", "/a?b=1&c=2"), " href=\"/a?b=1&amp;c=2\"");
        assert_eq!(opt_attr("alt", None::<&str>), "");
        assert_eq!(flag("disabled", true), " disabled");
        assert_eq!(flag("disabled", false), "");
    }
}
