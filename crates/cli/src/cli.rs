use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{analyze_command, command_command, init_command};

#[derive(Parser, Debug)]
#[command(name = "robot-runnables")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the runnable lines of a suite file, or of every suite in a directory
    #[command(visible_alias = "a")]
    Analyze {
        /// Path to a suite file with optional line number (e.g., login.robot:10), or a directory
        filepath: String,

        /// Show JSON output
        #[arg(short, long)]
        verbose: bool,

        /// Collapse markers that share a line into one entry
        #[arg(short, long)]
        merged: bool,

        /// Dump the document tree instead of markers
        #[arg(long)]
        tree: bool,
    },
    /// Print the runner command for a line (or the whole file)
    #[command(visible_alias = "c")]
    Command {
        /// Path to a suite file with optional line number (e.g., login.robot:10)
        filepath: String,

        /// Print the command as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default .robot-runner.json
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Analyze {
                filepath,
                verbose,
                merged,
                tree,
            } => analyze_command(&filepath, verbose, merged, tree),
            Commands::Command { filepath, json } => command_command(&filepath, json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
