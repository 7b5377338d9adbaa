//! Unicode scalar decomposition for the shaping tool's `--unicodes=` flag.
//!
//! Text is split into Unicode scalar values, never bytes; a multi-byte
//! character is one unit. Each scalar is rendered as `U+XXXX` with at
//! least four uppercase hex digits, so supplementary-plane characters
//! come out as e.g. `U+1F600`.

/// Format one scalar value as `U+XXXX`.
pub fn format_scalar(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// The comma-joined code point list the shaping tool expects.
pub fn unicodes_arg(text: &str) -> String {
    text.chars()
        .map(format_scalar)
        .collect::<Vec<_>>()
        .join(",")
}
