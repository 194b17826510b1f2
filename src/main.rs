//! pkgmerge - boilerplate manifest merger
//!
//! A one-shot command line tool that merges a boilerplate package.json into a
//! host project's manifest: the scripts, dependencies, devDependencies and
//! peerDependencies sections are shallow-merged with the boilerplate winning
//! on key collisions, and the original host file is backed up first.

use clap::Parser;

mod backup;
mod cli;
mod commands;
mod error;
mod manifest;
mod merge;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge(args) => commands::merge::run(args, cli.verbose),
        Commands::Check(args) => commands::check::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
