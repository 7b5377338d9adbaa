// this_file: crates/fontpeek-core/src/params.rs

//! Typed render parameters and the hex parameter codec.
//!
//! Hosts hand over parameters as string pairs; [`RenderParams::from_pairs`]
//! validates and types them. The serialized form a host may persist is a
//! hex encoding of the `text` bytes, reversible via [`RenderParams::decode`].

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// The only parameter names a host may pass.
pub const PARAM_NAMES: [&str; 5] = ["lang", "text", "dir", "variations", "features"];

/// Which way the text flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
            Direction::TopToBottom => "ttb",
            Direction::BottomToTop => "btt",
        }
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Direction::LeftToRight),
            "rtl" => Ok(Direction::RightToLeft),
            "ttb" => Ok(Direction::TopToBottom),
            "btt" => Ok(Direction::BottomToTop),
            other => Err(ValidationError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering parameters for one preview request.
///
/// `dir`, `variations` and `features` are carried but not yet forwarded
/// to the shaping tool; see the render flow in the `fontpeek` crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderParams {
    /// Text to render; the configured sample string when absent or empty
    pub text: Option<String>,
    /// BCP 47 language tag, e.g. `en`, `fa-IR`
    pub lang: Option<String>,
    /// Writing direction
    pub dir: Option<Direction>,
    /// Variable-font axis settings, e.g. `wght=500`
    pub variations: Option<String>,
    /// OpenType feature toggles, e.g. `kern`
    pub features: Option<String>,
}

impl RenderParams {
    /// Build params from raw host pairs, rejecting anything outside the
    /// recognized set or failing the positive-value check.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = RenderParams::default();
        for (name, value) in pairs {
            if !PARAM_NAMES.contains(&name) {
                return Err(ValidationError::UnknownParam(name.to_string()));
            }
            if !is_positive(value) {
                return Err(ValidationError::NonPositive {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            match name {
                "lang" => params.lang = Some(value.to_string()),
                "text" => params.text = Some(value.to_string()),
                "dir" => params.dir = Some(value.parse()?),
                "variations" => params.variations = Some(value.to_string()),
                "features" => params.features = Some(value.to_string()),
                _ => unreachable!("name checked against PARAM_NAMES"),
            }
        }
        Ok(params)
    }

    /// Serialize the `text` field as lowercase hex for host persistence.
    ///
    /// Only `text` travels through the serialized form; the remaining
    /// fields are re-supplied by the host on each request.
    pub fn encode(&self) -> String {
        encode_hex(self.text.as_deref().unwrap_or("").as_bytes())
    }

    /// Inverse of [`RenderParams::encode`].
    pub fn decode(encoded: &str) -> Result<Self, ValidationError> {
        let bytes = decode_hex(encoded)?;
        let text = String::from_utf8(bytes).map_err(|_| ValidationError::BadUtf8)?;
        Ok(RenderParams {
            text: Some(text),
            ..RenderParams::default()
        })
    }
}

/// The positive-value check applied to every incoming parameter value.
///
/// A value passes when it is non-blank and, if it parses fully as a
/// number, that number is greater than zero. `"en"` and `"wght=500"`
/// pass; `""`, `"0"` and `"-3"` do not.
pub fn is_positive(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => n > 0.0,
        Err(_) => true,
    }
}

/// True iff `name` is recognized and `value` passes the positive check.
pub fn validate_param(name: &str, value: &str) -> bool {
    PARAM_NAMES.contains(&name) && is_positive(value)
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(hex_digit(byte >> 4));
        out.push(hex_digit(byte & 0x0f));
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).unwrap_or('0')
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ValidationError> {
    if s.len() % 2 != 0 || !s.is_ascii() {
        return Err(ValidationError::BadHex(s.to_string()));
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    for pair in s.as_bytes().chunks(2) {
        let digits = std::str::from_utf8(pair).map_err(|_| ValidationError::BadHex(s.to_string()))?;
        let byte = u8::from_str_radix(digits, 16)
            .map_err(|_| ValidationError::BadHex(s.to_string()))?;
        out.push(byte);
    }
    Ok(out)
}
