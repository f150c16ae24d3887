/// Escape a string for the ASCII-only canonical form.
///
/// This function escapes:
/// - Double quote and backslash
/// - `\b`, `\f`, `\n`, `\r`, `\t` with their short forms
/// - Every other character outside printable ASCII as `\uXXXX` (lowercase
///   hex), astral characters as a UTF-16 surrogate pair
///
/// The result only contains bytes in `0x20..=0x7E`.
///
/// # Examples
///
/// ```
/// use json_tb_value::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("caf\u{e9}"), "caf\\u00e9");
/// ```
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        if (' '..='~').contains(&ch) && ch != '"' && ch != '\\' {
            continue;
        }

        result.push_str(&s[last..i]);
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\u{0008}' => result.push_str("\\b"),
            '\u{000C}' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    result.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}
