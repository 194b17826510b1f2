//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pkgmerge - boilerplate manifest merger
///
/// Merge a boilerplate package.json into a host project's manifest, with a
/// timestamped backup of the original.
#[derive(Parser, Debug)]
#[command(
    name = "pkgmerge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge a boilerplate package.json into a host project's manifest",
    long_about = "pkgmerge combines the scripts, dependencies, devDependencies and \
                  peerDependencies sections of a boilerplate package.json into a host \
                  project's package.json. The host file is backed up before it is \
                  overwritten; colliding keys take the boilerplate's value.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pkgmerge merge\n    \
                  pkgmerge merge --template templates/base/package.json\n    \
                  pkgmerge merge --dry-run\n    \
                  pkgmerge check\n\n\
                  \x1b[1m\x1b[32mBackups:\x1b[0m\n    \
                  The pre-merge package.json is copied to a .boilerplate-backup-<date>-<time>\n    \
                  directory, overridable with --backup-dir or BOILERPLATE_BACKUP_DIR."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge the boilerplate manifest into the host manifest
    Merge(MergeArgs),

    /// Report key collisions between the manifests without merging
    Check(CheckArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the merge command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Merge with default paths:\n    pkgmerge merge\n\n\
                  Merge from a custom template:\n    pkgmerge merge --template templates/base/package.json\n\n\
                  Preview without writing:\n    pkgmerge merge --dry-run\n\n\
                  Back up into a fixed directory:\n    pkgmerge merge --backup-dir .backup")]
pub struct MergeArgs {
    /// Host manifest to merge into
    #[arg(long, default_value = "package.json")]
    pub host: PathBuf,

    /// Boilerplate manifest to merge from
    #[arg(long, default_value = "boilerplate/package.json")]
    pub template: PathBuf,

    /// Backup directory for the pre-merge host manifest
    #[arg(long, env = "BOILERPLATE_BACKUP_DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Print the merged manifest to stdout without backing up or writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check with default paths:\n    pkgmerge check\n\n\
                  Check against a custom template:\n    pkgmerge check --template templates/base/package.json")]
pub struct CheckArgs {
    /// Host manifest to compare
    #[arg(long, default_value = "package.json")]
    pub host: PathBuf,

    /// Boilerplate manifest to compare against
    #[arg(long, default_value = "boilerplate/package.json")]
    pub template: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pkgmerge completions --shell bash > ~/.bash_completion.d/pkgmerge\n\n\
                  Generate zsh completions:\n    pkgmerge completions --shell zsh > ~/.zfunc/_pkgmerge\n\n\
                  Generate fish completions:\n    pkgmerge completions --shell fish > ~/.config/fish/completions/pkgmerge.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
