//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fontpeek - font previews and metadata from the command line
#[derive(Parser, Debug)]
#[command(name = "fontpeek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a font preview to an SVG file
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Query font metadata (full name, width, weight)
    #[command(alias = "m")]
    Metadata(MetadataArgs),

    /// Display recognized parameters, capabilities and tool availability
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Font file path (.ttf, .otf)
    pub font: PathBuf,

    /// Output SVG path
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Text to render (the sample string when omitted)
    #[arg(short = 't', long = "text")]
    pub text: Option<String>,

    /// Language tag (BCP 47), e.g., en, fa-IR
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Text direction: ltr, rtl, ttb, btt (accepted, not yet forwarded)
    #[arg(short = 'd', long = "direction")]
    pub direction: Option<String>,

    /// Variable-font axis settings, e.g. wght=500 (accepted, not yet forwarded)
    #[arg(long = "variations")]
    pub variations: Option<String>,

    /// Font feature settings, e.g. kern (accepted, not yet forwarded)
    #[arg(short = 'F', long = "features")]
    pub features: Option<String>,

    /// URL recorded on the result (defaults to the output path)
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Shaping tool executable to invoke
    #[arg(long = "hb-view")]
    pub hb_view: Option<PathBuf>,

    /// Seconds to wait for the shaping tool; 0 disables the limit
    #[arg(long = "timeout", default_value = "30")]
    pub timeout: u64,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the metadata command
#[derive(Parser, Debug)]
pub struct MetadataArgs {
    /// Font file path (.ttf, .otf)
    pub font: PathBuf,

    /// Emit JSON instead of the label listing
    #[arg(long = "json")]
    pub json: bool,

    /// Metadata tool executable to invoke
    #[arg(long = "fc-query")]
    pub fc_query: Option<PathBuf>,

    /// Seconds to wait for the metadata tool; 0 disables the limit
    #[arg(long = "timeout", default_value = "30")]
    pub timeout: u64,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List recognized render parameters and their host keys
    #[arg(long)]
    pub params: bool,

    /// List declared thumbnail capabilities
    #[arg(long)]
    pub capabilities: bool,

    /// Probe external tool availability
    #[arg(long)]
    pub tools: bool,
}
