use clap::{Parser, Subcommand};

use crate::task::Filter;

/// CLI arguments parsed from command line.
#[derive(Debug, Default, Parser)]
#[command(
    name = "tickoff",
    version,
    about = "A to-do list for the terminal",
    after_help = "Run without a command to open the interactive list."
)]
pub struct CliArgs {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Path to config file (default: tickoff.toml).
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<String>,
    /// Path to the storage file.
    #[arg(long = "store", global = true, value_name = "PATH")]
    pub store_file: Option<String>,
    /// Path to the log file.
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<String>,
    /// Filter to show: all, active, completed.
    #[arg(short = 'f', long, global = true, value_parser = parse_filter)]
    pub filter: Option<Filter>,
    /// Keep tasks in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// tickoff subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the interactive list (default).
    Ui,
    /// Print the tasks matching the filter.
    List,
    /// Add a task.
    Add {
        /// Task text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Toggle completion of a task.
    Done { id: i64 },
    /// Edit the text of a task.
    Edit { id: i64 },
    /// Delete a task.
    Rm {
        id: i64,
        /// Do not ask for confirmation.
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Switch between light and dark theme.
    Theme,
    /// Show task counts and the current theme.
    Status,
    /// Write a default tickoff.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    Filter::parse(s).ok_or_else(|| format!("unknown filter '{}' (expected all, active, completed)", s))
}

/// Parse CLI arguments from an iterator. The first item is the program name.
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}
