//! fontpeek - font preview thumbnails via external tools
//!
//! fontpeek turns a font file into an SVG preview and a small metadata
//! record by shelling out to two well-known binaries:
//!
//! - `hb-view` (HarfBuzz) renders a sample string as SVG
//! - `fc-query` (fontconfig) reports full name, width and weight
//!
//! The crate is a façade over those tools: validation, command-line
//! construction and output parsing live in `fontpeek-core`; this crate
//! adds the configuration, the system process runner with a bounded
//! timeout, and the [`ThumbnailHandler`] capability surface a host
//! registers.
//!
//! # Example
//!
//! ```ignore
//! use fontpeek::prelude::*;
//! use std::path::Path;
//!
//! let renderer = PreviewRenderer::new(PreviewConfig::default());
//! let params = RenderParams::from_pairs([("text", "Hi"), ("lang", "en")])?;
//! let thumb = renderer.render(
//!     Path::new("Sample.ttf"),
//!     Path::new("preview.svg"),
//!     "/thumbs/preview.svg",
//!     &params,
//! )?;
//! assert_eq!((thumb.width, thumb.height), (640, 240));
//! ```
//!
//! Process execution is injectable: pass any
//! [`CommandRunner`](fontpeek_core::CommandRunner) to
//! [`PreviewRenderer::with_runner`] for deterministic tests.

pub use fontpeek_core::{
    codepoints, error, invoke, metadata, params, CommandRunner, Direction, ExecOutput,
    FontMetadata, FontPeekError, Invocation, MetadataError, RenderError, RenderParams, Result,
    ValidationError,
};

pub mod config;
pub mod handler;
pub mod runner;

pub use config::PreviewConfig;
pub use handler::{
    PreviewRenderer, Thumbnail, ThumbnailHandler, HOST_PARAM_KEYS, THUMB_FORMAT, THUMB_HEIGHT,
    THUMB_MIME, THUMB_WIDTH,
};
pub use runner::SystemRunner;

/// Common imports for typical usage
pub mod prelude {
    pub use crate::config::PreviewConfig;
    pub use crate::handler::{PreviewRenderer, Thumbnail, ThumbnailHandler};
    pub use crate::runner::SystemRunner;
    pub use fontpeek_core::{
        CommandRunner, Direction, FontMetadata, FontPeekError, RenderParams, Result,
    };
}
