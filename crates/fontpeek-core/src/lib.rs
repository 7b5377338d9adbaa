// this_file: crates/fontpeek-core/src/lib.rs

//! Fontpeek Core: everything about a preview request except the process.
//!
//! A font preview is a single external tool call. This crate owns every
//! decision that call depends on, as pure, directly testable code:
//!
//! - [`params`] - typed render parameters, validation, and the hex codec
//! - [`codepoints`] - Unicode scalar decomposition into `U+XXXX` lists
//! - [`invoke`] - the exact argv for the shaping and metadata tools
//! - [`metadata`] - parsing the metadata tool's colon-joined response
//! - [`exec`] - the [`CommandRunner`] seam a host injects an executor through
//!
//! No function in this crate spawns a process or touches the filesystem.
//! The `fontpeek` crate wires these pieces to a real runner.

pub mod codepoints;
pub mod error;
pub mod exec;
pub mod invoke;
pub mod metadata;
pub mod params;

pub use error::{FontPeekError, MetadataError, RenderError, Result, ValidationError};
pub use exec::{CommandRunner, ExecOutput};
pub use invoke::Invocation;
pub use metadata::FontMetadata;
pub use params::{Direction, RenderParams};

#[cfg(test)]
mod proptests;
