//! docsite CLI - build tools for the documentation website.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

mod cli;
mod docs;
mod logger;
mod modules;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet);

    let result = match args.command {
        cli::Command::Api(ref api_args) => docs::run(api_args),
        cli::Command::Modules(ref modules_args) => modules::run(modules_args),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
