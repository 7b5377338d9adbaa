//! Command lines for the external tools, built as pure data.
//!
//! Nothing here spawns a process; [`Invocation`] values go through a
//! [`CommandRunner`](crate::exec::CommandRunner), which keeps every
//! argv decision directly testable.

use crate::metadata::FC_QUERY_FORMAT;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Transparent background for rendered previews (ARGB)
pub const BACKGROUND: &str = "#00000000";
/// Black foreground (RGB)
pub const FOREGROUND: &str = "#000000";
/// Fixed preview font size in pixels
pub const DEFAULT_FONT_SIZE: u32 = 20;
/// Fallback language tag when the request carries none
pub const DEFAULT_LANG: &str = "en";

/// One external tool call: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Lossy single-line rendering for logs.
    pub fn display_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Build the shaping-tool call that renders `unicodes` from `font`
/// into an SVG at `output`.
pub fn shaping_invocation(
    tool: &Path,
    font: &Path,
    output: &Path,
    font_size: u32,
    lang: &str,
    unicodes: &str,
) -> Invocation {
    Invocation::new(tool)
        .arg(format!("--background={BACKGROUND}"))
        .arg(format!("--foreground={FOREGROUND}"))
        .arg(format!("--font-size={font_size}"))
        .arg(format!("--language={lang}"))
        .arg(font)
        .arg(format!("--unicodes={unicodes}"))
        .arg("-o")
        .arg(output)
}

/// Build the metadata-tool call that reports full name, width and
/// weight for `font` as one colon-joined line.
pub fn metadata_invocation(tool: &Path, font: &Path) -> Invocation {
    Invocation::new(tool)
        .arg(font)
        .arg(format!("--format={FC_QUERY_FORMAT}"))
}
