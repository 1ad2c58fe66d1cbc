//! Byte-aligned case folding
//!
//! Characters are lowercased only when the lowercase form has the same UTF-8
//! length as the original, so byte `i` of the folded text always comes from
//! byte `i` of the input. Invalid UTF-8 is copied through untouched.

/// Append the case-folded form of `bytes` to `out`
pub fn fold_case_into(bytes: &[u8], out: &mut Vec<u8>) {
    out.reserve(bytes.len());

    for chunk in bytes.utf8_chunks() {
        fold_str_into(chunk.valid(), out);
        out.extend_from_slice(chunk.invalid());
    }
}

/// Case-fold a string, keeping its byte length
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_str_into(text: &str, out: &mut Vec<u8>) {
    if text.is_ascii() {
        out.extend(text.bytes().map(|b| b.to_ascii_lowercase()));
        return;
    }

    let mut buf = [0u8; 4];
    for c in text.chars() {
        let folded = fold_char(c);
        out.extend_from_slice(folded.encode_utf8(&mut buf).as_bytes());
    }
}

#[inline]
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
        _ => c,
    }
}
