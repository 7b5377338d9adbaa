//! Metadata command implementation

use crate::cli::MetadataArgs;
use fontpeek::prelude::*;
use std::time::Duration;

pub fn run(args: &MetadataArgs) -> anyhow::Result<()> {
    let mut config = PreviewConfig::default();
    if let Some(path) = &args.fc_query {
        config.fc_query = path.clone();
    }
    config.timeout = (args.timeout > 0).then(|| Duration::from_secs(args.timeout));

    let renderer = PreviewRenderer::new(config);
    let metadata = renderer.query_metadata(&args.font)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        for (label, value) in metadata.display_pairs() {
            println!("{label}: {value}");
        }
    }

    Ok(())
}
