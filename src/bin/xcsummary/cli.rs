//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use xcsummary::util::shell::ColorChoice;

/// xcsummary - list the targets and Swift packages of an Xcode project
#[derive(Parser)]
#[command(name = "xcsummary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Global config file to use instead of the default location
    #[arg(long, global = true, env = "XCSUMMARY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the project name, targets and packages
    Show(ShowArgs),

    /// List native targets with their package product dependencies
    Targets(TargetsArgs),

    /// List Swift package dependencies
    Packages(PackagesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the .xcodeproj (defaults to the one in the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct TargetsArgs {
    /// Path to the .xcodeproj (defaults to the one in the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct PackagesArgs {
    /// Path to the .xcodeproj (defaults to the one in the current directory)
    pub path: Option<PathBuf>,

    /// Only packages fetched from a repository
    #[arg(long, conflicts_with = "local")]
    pub remote: bool,

    /// Only packages inside the source tree
    #[arg(long)]
    pub local: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
