//! xcsummary CLI - summarize Xcode projects and their Swift packages

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use xcsummary::util::config::OutputFormat;
use xcsummary::util::{GlobalContext, Shell};
use xcsummary::PbxprojError;

fn main() {
    if let Err(e) = run() {
        report(e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("xcsummary=debug")
        } else {
            EnvFilter::new("xcsummary=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut ctx = GlobalContext::new()?;
    if let Some(config) = &cli.config {
        ctx = ctx.with_global_config(config.clone());
    }
    let shell = shell_for(&cli, &ctx);

    // Execute command
    match cli.command {
        Commands::Show(args) => commands::show::execute(args, &ctx, &shell),
        Commands::Targets(args) => commands::targets::execute(args, &ctx, &shell),
        Commands::Packages(args) => commands::packages::execute(args, &ctx, &shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Command-line flags override the merged configuration.
fn shell_for(cli: &Cli, ctx: &GlobalContext) -> Shell {
    let config = ctx.config();
    let json = (cli.json || config.format() == OutputFormat::Json).then(|| config.pretty());
    let color = cli.color.unwrap_or_else(|| config.color());

    Shell::from_flags(cli.quiet, cli.verbose, color, json)
}

/// Descriptor errors get miette's report so syntax errors show the source.
fn report(error: anyhow::Error) {
    match error.downcast::<PbxprojError>() {
        Ok(e) => eprintln!("{:?}", miette::Report::new(e)),
        Err(e) => eprintln!("error: {:#}", e),
    }
}
