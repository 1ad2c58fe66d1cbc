//! Markup escaping for corpus text

/// Escape `& < > " '` so corpus bytes can be embedded in HTML
///
/// Bytes that are not valid UTF-8 become U+FFFD before escaping.
pub fn escape_markup(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}
