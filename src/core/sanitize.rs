//! Markup stripping with a fixed tag allow-list

use regex::{Captures, Regex};

/// Tags that survive sanitization; everything else is stripped before
/// the text is sent to the translation endpoint.
const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "div", "span", "strong", "b",
];

/// Strip all markup from `text` except the allow-listed tags.
///
/// Only the tag markup is removed; inner text is always kept. HTML
/// comments are removed entirely. Allowed tags are matched
/// case-insensitively and kept verbatim, attributes included.
pub fn strip_tags(text: &str) -> String {
    let comment = Regex::new(r"(?s)<!--.*?-->").unwrap();
    let tag = Regex::new(r"(?s)</?([a-zA-Z][a-zA-Z0-9]*)[^>]*>").unwrap();

    let without_comments = comment.replace_all(text, "");

    tag.replace_all(&without_comments, |caps: &Captures| {
        let name = caps[1].to_lowercase();
        if ALLOWED_TAGS.contains(&name.as_str()) {
            caps[0].to_string()
        } else {
            String::new()
        }
    })
    .into_owned()
}
