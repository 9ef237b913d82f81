use ammonia::{Builder, UrlRelative};

/// Strips scripts, event handlers and unsafe URLs from user supplied HTML.
pub fn sanitize_rich_text(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}
