//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// nexus3 - Work with Nexus 3 repository paths, listings and cleanup policies
#[derive(Parser, Debug)]
#[command(name = "nexus3")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "NEXUS3_VERBOSE")]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Split a repository path into repository, directory and filename
    ///
    /// Examples:
    ///   nexus3 resolve maven-releases/org/acme/app.jar
    ///   nexus3 resolve raw/docs/ --json
    Resolve {
        /// Path of the form repository[/directory][/filename]
        path: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the digest of a local file
    Hash {
        /// File to hash
        file: PathBuf,

        /// Digest algorithm (sha1, md5, sha256, sha512)
        #[arg(short, long, default_value = "sha1")]
        algorithm: String,
    },

    /// Filter the records of a saved listing by path
    ///
    /// The listing file holds either an array of records or one page of a
    /// search response (`items` plus `continuationToken`).
    ///
    /// Examples:
    ///   nexus3 list listing.json --term docs/
    ///   nexus3 list listing.json --term docs/index.html --exact
    List {
        /// Listing file (.json, .yaml or .toml)
        listing: PathBuf,

        /// Path filter; prefix match unless --exact is given
        #[arg(short, long)]
        term: Option<String>,

        /// Require the whole path to equal the term
        #[arg(long)]
        exact: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show which records of a listing a download would fetch
    ///
    /// Compares each matching record's checksum with the local file it
    /// would be written to. Nothing is downloaded or written.
    ///
    /// Examples:
    ///   nexus3 plan-download listing.json raw/docs/ ./site
    ///   nexus3 plan-download listing.json raw/docs/ ./site --flatten --json
    PlanDownload {
        /// Listing file (.json, .yaml or .toml)
        listing: PathBuf,

        /// Remote repository path to download from
        remote_path: String,

        /// Local destination directory
        local_dir: PathBuf,

        /// Place every file directly in the destination directory
        #[arg(long)]
        flatten: bool,

        /// Download even when the local file has the same checksum
        #[arg(long)]
        no_cache: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Cleanup policy commands
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   nexus3 completions bash > ~/.local/share/bash-completion/completions/nexus3
    ///   nexus3 completions zsh > ~/.zfunc/_nexus3
    ///   nexus3 completions fish > ~/.config/fish/completions/nexus3.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Cleanup policy actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PolicyAction {
    /// Print the payload a policy file would be sent as
    Render {
        /// Policy definition file (.toml, .json or .yaml)
        policy_file: PathBuf,
    },
}
