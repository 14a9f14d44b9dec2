//! Text normalization for search keys and summaries.

/// Normalize a display name into a search key.
///
/// Lowercases, collapses every run of non-word characters (anything other
/// than ASCII alphanumerics and `_`) into a single space, and trims.
///
/// `"addEach(values)"` becomes `"addeach values"`.
pub fn search_key(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut key = String::with_capacity(lower.len());
    let mut in_gap = false;
    for ch in lower.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if in_gap && !key.is_empty() {
                key.push(' ');
            }
            in_gap = false;
            key.push(ch);
        } else {
            in_gap = true;
        }
    }
    key
}

/// The bare method name: everything before the first parenthesis.
///
/// Names without a parenthesis are returned whole.
pub fn bare_name(name: &str) -> &str {
    match name.find('(') {
        Some(paren) => &name[..paren],
        None => name,
    }
}

/// Strip one leading `<p>` and one trailing `</p>\n` from rendered HTML,
/// so a single-paragraph summary can be shown inline.
pub fn strip_paragraph(html: &str) -> &str {
    let html = html.strip_prefix("<p>").unwrap_or(html);
    html.strip_suffix("</p>\n").unwrap_or(html)
}
