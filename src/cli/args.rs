//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{OsVariant, PowerAction};

/// Design pattern walkthroughs: a phone factory and a composite command hierarchy
#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Order a phone from the factory and toggle its power
    Phone {
        /// Phone OS: android or google (default from config)
        #[arg(short, long)]
        os: Option<OsVariant>,
        /// Power actions applied in order: on, off
        actions: Vec<PowerAction>,
    },

    /// Pass an order down the command hierarchy
    Brief {
        /// Order to give (default from config)
        order: Option<String>,
        /// Hierarchy file (default from config, else the built-in division)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Show the command hierarchy as a tree
    Tree {
        /// Hierarchy file (default from config, else the built-in division)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Run both walkthroughs with built-in values
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the global config file location
    Path,
    /// Print a commented config template
    Template,
}
