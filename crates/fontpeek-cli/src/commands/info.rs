//! Info command implementation
//!
//! Displays recognized parameters, declared capabilities and whether
//! the external tools can be found.

use crate::cli::InfoArgs;
use fontpeek::prelude::*;
use fontpeek::{Invocation, ThumbnailHandler, HOST_PARAM_KEYS};
use std::path::Path;
use std::time::Duration;

pub fn run(args: &InfoArgs) -> anyhow::Result<()> {
    // If no specific flags, show all info
    let show_all = !args.params && !args.capabilities && !args.tools;

    println!("fontpeek v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all || args.params {
        print_params();
        if show_all {
            println!();
        }
    }

    if show_all || args.capabilities {
        print_capabilities();
        if show_all {
            println!();
        }
    }

    if show_all || args.tools {
        print_tools();
    }

    Ok(())
}

fn print_params() {
    println!("Render parameters:");
    println!("  lang              - BCP 47 language tag (default: en)");
    println!("  text              - text to render (default: sample string)");
    println!("  dir               - writing direction: ltr, rtl, ttb, btt");
    println!("  variations        - variable-font axis settings, e.g. wght=500");
    println!("  features          - font feature settings, e.g. kern");
    println!();
    println!("Host keys:");
    for (key, name) in HOST_PARAM_KEYS {
        println!("  {key:<24} -> {name}");
    }
}

fn print_capabilities() {
    let renderer = PreviewRenderer::new(PreviewConfig::default());
    let probe = Path::new("font.ttf");
    let (width, height, format) = renderer.thumbnail_dimensions(probe);
    let (ext, mime) = renderer.thumb_type();
    println!("Capabilities:");
    println!("  thumbnail         - {width}x{height} {format} (declared, fixed)");
    println!("  thumb type        - .{ext} ({mime})");
    println!("  must render       - {}", renderer.must_render(probe));
    println!("  vectorized        - {}", renderer.is_vectorized(probe));
}

fn print_tools() {
    let config = PreviewConfig::default();
    println!("External tools:");
    print_tool_status("shaping", &config.hb_view);
    print_tool_status("metadata", &config.fc_query);
}

fn print_tool_status(role: &str, program: &Path) {
    let runner = SystemRunner::new(Some(Duration::from_secs(5)));
    let invocation = Invocation::new(program).arg("--version");
    // Any spawnable binary counts as present, whatever --version exits with
    match runner.run(&invocation) {
        Ok(out) => {
            let line = out
                .stdout
                .lines()
                .chain(out.stderr.lines())
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            println!("  {role:<17} - {} ({line})", program.display());
        }
        Err(err) => {
            println!("  {role:<17} - {} (unavailable: {err})", program.display());
        }
    }
}
