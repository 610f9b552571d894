//! HTML helpers shared by the theme and translated link text.

/// HTML-escape a string for safe output.
///
/// Unlike Tera's default escaper this leaves `/` alone, so hrefs render as
/// written.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Expand `{name|text}` link placeholders in a translated string.
///
/// Plain text is escaped; each placeholder whose `name` appears in `links`
/// becomes an anchor around `text`. Unknown placeholders are kept as text.
///
/// ```
/// use header_menu::html::expand_links;
///
/// let html = expand_links("Try and {search_url|search} instead.", &[("search_url", "/search")]);
/// assert_eq!(html, r#"Try and <a href="/search">search</a> instead."#);
/// ```
pub fn expand_links(text: &str, links: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let placeholder = &rest[start + 1..start + len];

        out.push_str(&html_escape(&rest[..start]));
        let link = placeholder.split_once('|').and_then(|(name, label)| {
            links
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, href)| (href, label))
        });
        match link {
            Some((href, label)) => {
                out.push_str("<a href=\"");
                out.push_str(&html_escape(href));
                out.push_str("\">");
                out.push_str(&html_escape(label));
                out.push_str("</a>");
            }
            None => out.push_str(&html_escape(&rest[start..=start + len])),
        }
        rest = &rest[start + len + 1..];
    }

    out.push_str(&html_escape(rest));
    out
}
