// this_file: crates/fontpeek/src/handler.rs

//! The preview handler: one tool call per thumbnail, one per metadata
//! query, no state in between.
//!
//! [`ThumbnailHandler`] is the capability surface a host registers;
//! [`PreviewRenderer`] implements it on top of an injected
//! [`CommandRunner`]. Every call is single-shot and synchronous, and
//! carries no memory across calls.

use crate::config::PreviewConfig;
use crate::runner::SystemRunner;
use fontpeek_core::{
    codepoints, invoke, CommandRunner, FontMetadata, MetadataError, RenderError, RenderParams,
    Result, ValidationError,
};
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Declared preview width; a capability constant, not a measurement
pub const THUMB_WIDTH: u32 = 640;
/// Declared preview height
pub const THUMB_HEIGHT: u32 = 240;
/// Preview image format
pub const THUMB_FORMAT: &str = "svg";
/// MIME type matching [`THUMB_FORMAT`]
pub const THUMB_MIME: &str = "image/svg+xml";

/// How hosts spell the recognized parameters, mapped to internal names.
pub const HOST_PARAM_KEYS: [(&str, &str); 5] = [
    ("img_lang", "lang"),
    ("fonthandler_text", "text"),
    ("fonthandler_dir", "dir"),
    ("fonthandler_variations", "variations"),
    ("fonthandler_features", "features"),
];

/// A finished preview, pointing into the caller's thumbnail store.
///
/// The caller owns the file at `path`; the handler never deletes or
/// rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The capability surface a host registers for font files.
///
/// Defaults cover the declared capabilities; implementors supply the
/// two operations that actually touch a tool.
pub trait ThumbnailHandler: Send + Sync {
    /// Any font file handed to this handler is renderable.
    fn can_render(&self, _font: &Path) -> bool {
        true
    }

    /// True iff `name` is recognized and `value` passes the positive check.
    fn validate_param(&self, name: &str, value: &str) -> bool {
        fontpeek_core::params::validate_param(name, value)
    }

    /// Serialize params for host persistence.
    fn encode_params(&self, params: &RenderParams) -> String {
        params.encode()
    }

    /// Inverse of [`ThumbnailHandler::encode_params`].
    fn decode_params(&self, encoded: &str) -> std::result::Result<RenderParams, ValidationError> {
        RenderParams::decode(encoded)
    }

    /// Fixed declared dimensions and format, independent of font content.
    fn thumbnail_dimensions(&self, _font: &Path) -> (u32, u32, &'static str) {
        (THUMB_WIDTH, THUMB_HEIGHT, THUMB_FORMAT)
    }

    /// Human-readable dimensions label.
    fn dimensions_string(&self, _font: &Path) -> &'static str {
        "Font"
    }

    /// Thumbnail extension and MIME type.
    fn thumb_type(&self) -> (&'static str, &'static str) {
        (THUMB_FORMAT, THUMB_MIME)
    }

    /// Previews cannot be served from the source file directly.
    fn must_render(&self, _font: &Path) -> bool {
        true
    }

    fn is_vectorized(&self, _font: &Path) -> bool {
        true
    }

    /// Host parameter keys mapped to internal names.
    fn param_map(&self) -> &'static [(&'static str, &'static str)] {
        &HOST_PARAM_KEYS
    }

    /// Metadata is never cached, so it is always current.
    fn is_metadata_valid(&self, _font: &Path) -> bool {
        true
    }

    /// Render a preview of `font` into `output_path`.
    fn render(
        &self,
        font: &Path,
        output_path: &Path,
        output_url: &str,
        params: &RenderParams,
    ) -> Result<Thumbnail>;

    /// Query `font` for its full name, width and weight.
    fn query_metadata(&self, font: &Path) -> Result<FontMetadata>;
}

/// Renders font previews by invoking the configured external tools.
pub struct PreviewRenderer {
    config: PreviewConfig,
    runner: Arc<dyn CommandRunner>,
}

impl PreviewRenderer {
    /// Handler with the system runner, bounded by the configured timeout.
    pub fn new(config: PreviewConfig) -> Self {
        let runner = Arc::new(SystemRunner::new(config.timeout));
        Self { config, runner }
    }

    /// Handler with a caller-supplied runner.
    pub fn with_runner(config: PreviewConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// The text a request resolves to: its own non-empty text, else the
    /// configured sample for its language.
    fn resolve_text<'a>(&'a self, params: &'a RenderParams, lang: &str) -> &'a str {
        match params.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => self.config.sample_text_for(lang),
        }
    }

    fn render_error(&self, err: io::Error, program: &Path) -> RenderError {
        match err.kind() {
            io::ErrorKind::NotFound => {
                RenderError::ToolMissing(program.display().to_string())
            }
            io::ErrorKind::TimedOut => RenderError::TimedOut(
                self.config.timeout.unwrap_or(Duration::ZERO),
            ),
            _ => RenderError::Spawn {
                program: program.display().to_string(),
                source: err,
            },
        }
    }

    fn metadata_error(&self, err: io::Error, program: &Path) -> MetadataError {
        match err.kind() {
            io::ErrorKind::NotFound => {
                MetadataError::ToolMissing(program.display().to_string())
            }
            io::ErrorKind::TimedOut => MetadataError::TimedOut(
                self.config.timeout.unwrap_or(Duration::ZERO),
            ),
            _ => MetadataError::Spawn {
                program: program.display().to_string(),
                source: err,
            },
        }
    }
}

impl ThumbnailHandler for PreviewRenderer {
    fn render(
        &self,
        font: &Path,
        output_path: &Path,
        output_url: &str,
        params: &RenderParams,
    ) -> Result<Thumbnail> {
        let lang = params.lang.as_deref().unwrap_or(&self.config.default_lang);
        let text = self.resolve_text(params, lang);
        let unicodes = codepoints::unicodes_arg(text);

        // TODO: forward params.dir, params.variations and params.features
        // as --direction=, --variation= and --features= once their wiring
        // is decided. They are validated and carried but not passed today.
        let invocation = invoke::shaping_invocation(
            &self.config.hb_view,
            font,
            output_path,
            self.config.font_size,
            lang,
            &unicodes,
        );
        debug!("render: {}", invocation.display_line());

        let out = self
            .runner
            .run(&invocation)
            .map_err(|e| self.render_error(e, &self.config.hb_view))?;
        if !out.stdout.is_empty() {
            debug!("{}: {}", self.config.hb_view.display(), out.stdout.trim_end());
        }
        if !out.stderr.is_empty() {
            warn!("{}: {}", self.config.hb_view.display(), out.stderr.trim_end());
        }

        if !out.success() {
            return Err(RenderError::ToolFailed {
                status: out.status_code(),
                stderr: out.stderr.trim().to_string(),
            }
            .into());
        }
        if !output_path.exists() {
            return Err(RenderError::MissingOutput(output_path.to_path_buf()).into());
        }

        Ok(Thumbnail {
            path: output_path.to_path_buf(),
            url: output_url.to_string(),
            width: THUMB_WIDTH,
            height: THUMB_HEIGHT,
        })
    }

    fn query_metadata(&self, font: &Path) -> Result<FontMetadata> {
        let invocation = invoke::metadata_invocation(&self.config.fc_query, font);
        debug!("metadata: {}", invocation.display_line());

        let out = self
            .runner
            .run(&invocation)
            .map_err(|e| self.metadata_error(e, &self.config.fc_query))?;
        if !out.stderr.is_empty() {
            warn!("{}: {}", self.config.fc_query.display(), out.stderr.trim_end());
        }

        if !out.success() {
            return Err(MetadataError::ToolFailed {
                status: out.status_code(),
                stderr: out.stderr.trim().to_string(),
            }
            .into());
        }

        FontMetadata::parse(&out.stdout).map_err(Into::into)
    }
}
