//! Render command implementation

use crate::cli::RenderArgs;
use anyhow::Context;
use fontpeek::prelude::*;
use language_tags::LanguageTag;
use std::time::Duration;

pub fn run(args: &RenderArgs) -> anyhow::Result<()> {
    if let Some(lang) = &args.language {
        LanguageTag::parse(lang)
            .with_context(|| format!("invalid BCP 47 language tag: {lang:?}"))?;
    }

    let mut config = PreviewConfig::default();
    if let Some(path) = &args.hb_view {
        config.hb_view = path.clone();
    }
    config.timeout = (args.timeout > 0).then(|| Duration::from_secs(args.timeout));

    let params = RenderParams {
        text: args.text.clone(),
        lang: args.language.clone(),
        dir: args
            .direction
            .as_deref()
            .map(str::parse)
            .transpose()
            .context("invalid direction")?,
        variations: args.variations.clone(),
        features: args.features.clone(),
    };

    let url = args
        .url
        .clone()
        .unwrap_or_else(|| args.output.display().to_string());
    log::debug!("render request: {params:?}");

    if !args.quiet {
        eprintln!("fontpeek v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Rendering preview of {}...", args.font.display());
    }

    let renderer = PreviewRenderer::new(config);
    let thumb = renderer.render(&args.font, &args.output, &url, &params)?;

    if !args.quiet {
        eprintln!("✓ Wrote {}", thumb.path.display());
        eprintln!("  Size: {}x{} (declared)", thumb.width, thumb.height);
        eprintln!("  URL: {}", thumb.url);
    }

    Ok(())
}
