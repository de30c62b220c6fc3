//! Markup escaping for instruction text
//!
//! Disassembled text can contain anything the binary's symbols contain, so
//! the renderer never embeds it raw. Escaping happens in two conceptual
//! steps, extended characters first: every code point outside ASCII becomes a
//! decimal character reference (making the intermediate result pure ASCII),
//! then the markup-significant characters from a fixed table are replaced.
//! The table deliberately omits `&` so the references introduced by the first
//! step survive the second; a literal `&` in token text passes through
//! unescaped as well.

/// Escape instruction text for embedding in markup
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\'' => out.push_str("&#39;"),
            '>' => out.push_str("&#62;"),
            '<' => out.push_str("&#60;"),
            '"' => out.push_str("&#34;"),
            ' ' => out.push_str("&#160;"),
            c if (c as u32) > 0x7f => {
                out.push_str(&format!("&#{};", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape raw instruction bytes for embedding in markup
///
/// Bytes are decoded as UTF-8; invalid sequences are replaced with U+FFFD,
/// which then escapes to `&#65533;`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    escape(&String::from_utf8_lossy(bytes))
}
