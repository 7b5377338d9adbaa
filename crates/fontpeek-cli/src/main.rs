//! fontpeek CLI - font previews and metadata via hb-view and fc-query

mod cli;
mod commands;

use clap::Parser;

fn main() {
    env_logger::init();

    let args = cli::Cli::parse();
    let result = match args.command {
        cli::Commands::Render(args) => commands::render::run(&args),
        cli::Commands::Metadata(args) => commands::metadata::run(&args),
        cli::Commands::Info(args) => commands::info::run(&args),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
