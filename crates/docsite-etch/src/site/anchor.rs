//! Heading anchors for rendered article HTML

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A complete `<h1>`..`<h6>` element
    static ref HEADING_REGEX: Regex =
        Regex::new(r"(?s)<(h[1-6])(\s[^>]*)?>(.*?)</h[1-6]>").unwrap();

    /// `id="..."` inside an attribute list
    static ref ID_REGEX: Regex = Regex::new(r#"(?:^|\s)id\s*=\s*"([^"]*)""#).unwrap();

    /// `class="..."` inside an attribute list
    static ref CLASS_REGEX: Regex = Regex::new(r#"(^|\s)class\s*=\s*"([^"]*)""#).unwrap();
}

/// Add an `article-heading` class and a trailing self-link to every heading
/// that has an `id`. Headings without one are left alone.
pub fn page_anchor(html: &str) -> String {
    HEADING_REGEX
        .replace_all(html, |caps: &Captures<'_>| {
            let tag = &caps[1];
            let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let inner = &caps[3];

            let Some(id) = ID_REGEX.captures(attrs).map(|c| c[1].to_string()) else {
                return caps[0].to_string();
            };

            let attrs = if CLASS_REGEX.is_match(attrs) {
                CLASS_REGEX
                    .replace(attrs, |c: &Captures<'_>| {
                        format!("{}class=\"{} article-heading\"", &c[1], &c[2])
                    })
                    .into_owned()
            } else {
                format!("{} class=\"article-heading\"", attrs)
            };

            format!(
                "<{tag}{attrs}>{inner}<a class=\"article-anchor\" href=\"#{id}\" aria-hidden=\"true\"></a></{tag}>"
            )
        })
        .into_owned()
}
