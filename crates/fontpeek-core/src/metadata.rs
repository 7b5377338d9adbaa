//! Font metadata as reported by the external metadata tool.

use crate::error::MetadataError;
use serde::Serialize;

/// Format string handed to the metadata tool; its stdout is one line
/// with the three fields colon-joined.
pub const FC_QUERY_FORMAT: &str = "%{fullname}:%{width}:%{weight}";

/// Metadata for one font file, built fresh per query and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontMetadata {
    pub full_name: String,
    pub width: String,
    pub weight: String,
}

impl FontMetadata {
    /// Parse the metadata tool's response.
    ///
    /// Only the first line is considered; it must split into at least
    /// three colon-separated fields, of which the first three are taken.
    pub fn parse(response: &str) -> Result<Self, MetadataError> {
        let line = response.lines().next().unwrap_or("");
        let mut parts = line.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(full_name), Some(width), Some(weight)) => Ok(FontMetadata {
                full_name: full_name.to_string(),
                width: width.to_string(),
                weight: weight.to_string(),
            }),
            _ => Err(MetadataError::Unparseable(response.trim().to_string())),
        }
    }

    /// Label/value pairs in presentation order.
    pub fn display_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("Full name", self.full_name.as_str()),
            ("Width", self.width.as_str()),
            ("Weight", self.weight.as_str()),
        ]
    }
}
