/// Minimal HTML entity escaping for text nodes and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html(r#"a & "b" & 'c'"#), "a &amp; &quot;b&quot; &amp; &#39;c&#39;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("12 Rue des Fleurs, Casablanca"), "12 Rue des Fleurs, Casablanca");
    }
}
