//! nexus3 CLI
//!
//! Offline operator commands over the Nexus 3 client core: repository path
//! resolution, local digests, listing filters, download planning and
//! cleanup policy payloads.

mod cli;
mod commands;
mod error;
mod listing;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, PolicyAction};
use error::Result;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go through clap's own exit path
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // Exit status still reports the usage error if stderr is closed
            e.print().ok();
            std::process::exit(7);
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Nexus 3 client", "nexus3".green().bold());
            println!();
            println!("Run {} for available commands.", "nexus3 --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { path, json } => commands::run_resolve(&path, json),
        Commands::Hash { file, algorithm } => commands::run_hash(&file, &algorithm),
        Commands::List {
            listing,
            term,
            exact,
            json,
        } => commands::run_list(&listing, term, exact, json),
        Commands::PlanDownload {
            listing,
            remote_path,
            local_dir,
            flatten,
            no_cache,
            json,
        } => commands::run_plan_download(
            &listing,
            &remote_path,
            &local_dir,
            commands::PlanOptions {
                flatten,
                no_cache,
                json,
            },
        ),
        Commands::Policy { action } => match action {
            PolicyAction::Render { policy_file } => commands::run_policy_render(&policy_file),
        },
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
