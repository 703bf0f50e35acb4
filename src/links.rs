use lazy_regex::regex;

/// Collects absolute `http`/`https` links from double-quoted `href` attributes,
/// in document order and with duplicates kept.
///
/// Single-quoted, unquoted and scheme-relative hrefs are never matched.
pub fn extract_links(content: &str) -> Vec<String> {
    regex!(r#"(?i)href\s*=\s*"(https?://[^\s"]+)""#)
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether the controller may follow `link`.
pub fn is_qualifying_link(link: &str) -> bool {
    link.get(..4)
        .map(|scheme| scheme.eq_ignore_ascii_case("http"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_content() {
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_single_quoted_href_is_ignored() {
        assert!(extract_links("<a href='http://x.com'>").is_empty());
    }

    #[test]
    fn test_unquoted_and_scheme_relative_are_ignored() {
        let html = r#"<a href=http://x.com>x</a><a href="//x.com/y">y</a><a href="/local">z</a>"#;
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_document_order_and_duplicates() {
        let html = r#"
            <a href="https://b.com/1">one</a>
            <A HREF = "HTTP://a.com/2">two</A>
            <a href="mailto:me@a.com">mail</a>
            <a href="https://b.com/1">again</a>
        "#;
        assert_eq!(
            extract_links(html),
            vec!["https://b.com/1", "HTTP://a.com/2", "https://b.com/1"]
        );
    }

    #[test]
    fn test_url_stops_at_whitespace() {
        let html = r#"<a href="https://a.com/x y">"#;
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_malformed_html() {
        let html = r#"<a href="https://a.com/ok"><<<div href="https://b.com/also" </p"#;
        assert_eq!(
            extract_links(html),
            vec!["https://a.com/ok", "https://b.com/also"]
        );
    }

    #[test]
    fn test_idempotent() {
        let html = r#"<link href="https://a.com/style.css"><a href="http://b.com">b</a>"#;
        assert_eq!(extract_links(html), extract_links(html));
    }

    #[test]
    fn test_is_qualifying_link() {
        assert!(is_qualifying_link("https://a.com"));
        assert!(is_qualifying_link("HTTP://a.com"));
        assert!(is_qualifying_link("httpfoo"));
        assert!(!is_qualifying_link("ftp://a.com"));
        assert!(!is_qualifying_link("htt"));
        assert!(!is_qualifying_link(""));
    }
}
