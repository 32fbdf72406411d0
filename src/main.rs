//! Granny Square Studio - Terminal crochet pattern workspace
//!
//! This application designs granny square blanket patterns: build a color
//! palette (by hand or from a book cover image), match it against a yarn
//! stash, generate a randomized grid, and export the result as a PNG.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grannygrid::cli::{
    self, DesignArgs, ExtractArgs, GenerateArgs, MatchArgs, StashArgs, TemplateArgs, TropesArgs,
    UsageArgs,
};

/// Granny Square Studio - Terminal crochet pattern workspace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand for headless use; omit to open the interactive workspace
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Headless subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract dominant colors from an image
    Extract(ExtractArgs),
    /// Parse a yarn stash CSV and show the normalized records
    Stash(StashArgs),
    /// Match colors extracted from an image against a yarn stash
    #[command(name = "match")]
    Match(MatchArgs),
    /// Estimate yarn usage for a grid
    Usage(UsageArgs),
    /// Generate a granny square grid
    Generate(GenerateArgs),
    /// Build a book-inspired design sheet end-to-end
    Design(DesignArgs),
    /// Write a yarn stash template CSV
    Template(TemplateArgs),
    /// List the literary tropes and their colors
    Tropes(TropesArgs),
}

fn run_command(command: &Commands) -> cli::common::CliResult<()> {
    match command {
        Commands::Extract(args) => args.execute(),
        Commands::Stash(args) => args.execute(),
        Commands::Match(args) => args.execute(),
        Commands::Usage(args) => args.execute(),
        Commands::Generate(args) => args.execute(),
        Commands::Design(args) => args.execute(),
        Commands::Template(args) => args.execute(),
        Commands::Tropes(args) => args.execute(),
    }
}

#[cfg(feature = "ratatui")]
fn launch_workspace() -> Result<()> {
    use grannygrid::config::Config;
    use grannygrid::constants::APP_NAME;
    use grannygrid::tui;

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal crochet pattern workspace");
    println!();

    // A broken or absent config falls back to defaults
    let config = Config::load().unwrap_or_else(|_| Config::default());

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(config);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;
    result
}

#[cfg(not(feature = "ratatui"))]
fn launch_workspace() -> Result<()> {
    use grannygrid::constants::APP_BINARY_NAME;

    anyhow::bail!(
        "This build has no interactive workspace. Rebuild with the `ratatui` \
         feature, or run `{APP_BINARY_NAME} --help` for headless commands"
    )
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            if let Err(e) = run_command(&command) {
                eprintln!("Error: {e}");
                std::process::exit(i32::from(e.exit_code().code()));
            }
            Ok(())
        }
        None => launch_workspace(),
    }
}
