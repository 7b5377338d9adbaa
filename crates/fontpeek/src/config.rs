//! Preview configuration
//!
//! Tool locations default to bare names resolved through `PATH` and can
//! be overridden per process via the `FONTPEEK_HB_VIEW` and
//! `FONTPEEK_FC_QUERY` environment variables:
//!
//! ```bash
//! FONTPEEK_HB_VIEW=/opt/harfbuzz/bin/hb-view ./my_app
//! ```

use fontpeek_core::invoke::{DEFAULT_FONT_SIZE, DEFAULT_LANG};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the shaping tool path
pub const HB_VIEW_ENV: &str = "FONTPEEK_HB_VIEW";
/// Environment variable overriding the metadata tool path
pub const FC_QUERY_ENV: &str = "FONTPEEK_FC_QUERY";

/// Sample string rendered when a request carries no text.
pub const DEFAULT_SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Everything the preview handler needs besides the request itself.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Shaping tool executable (`hb-view`)
    pub hb_view: PathBuf,
    /// Metadata tool executable (`fc-query`)
    pub fc_query: PathBuf,
    /// Preview font size in pixels
    pub font_size: u32,
    /// Language tag used when the request carries none
    pub default_lang: String,
    /// Sample text used when the request carries none
    pub sample_text: String,
    /// Per-language sample text, keyed by BCP 47 tag
    pub sample_text_overrides: BTreeMap<String, String>,
    /// Bound on each tool call; `None` waits forever
    pub timeout: Option<Duration>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            hb_view: tool_path(HB_VIEW_ENV, "hb-view"),
            fc_query: tool_path(FC_QUERY_ENV, "fc-query"),
            font_size: DEFAULT_FONT_SIZE,
            default_lang: DEFAULT_LANG.to_string(),
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            sample_text_overrides: BTreeMap::new(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl PreviewConfig {
    /// The sample string for `lang`, falling back to the global sample.
    pub fn sample_text_for(&self, lang: &str) -> &str {
        self.sample_text_overrides
            .get(lang)
            .map(String::as_str)
            .unwrap_or(&self.sample_text)
    }
}

fn tool_path(env_var: &str, default: &str) -> PathBuf {
    match std::env::var_os(env_var) {
        Some(path) if !path.is_empty() => {
            log::info!("{env_var} overrides {default} path: {:?}", path);
            PathBuf::from(path)
        }
        _ => PathBuf::from(default),
    }
}
