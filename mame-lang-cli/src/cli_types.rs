//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mame-lang")]
#[command(about = "Build MxUI Simplified Chinese language lists from MAME listings", long_about = None)]
pub(crate) struct Cli {
    /// Root directory holding the listing and MxUI folder (defaults to the executable's directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Settings file (defaults to <root>/mame-lang.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate the localized MxUI list from the listing and dictionaries
    Generate {
        /// Listing to read instead of the configured one
        #[arg(short, long)]
        listing: Option<PathBuf>,

        /// Title dictionary to read instead of the configured one
        #[arg(long)]
        titles: Option<PathBuf>,

        /// Bootleg-phrase dictionary to read instead of the configured one
        #[arg(long)]
        bootlegs: Option<PathBuf>,
    },

    /// Extract translator work files from the listing and a name seed
    Extract {
        /// Name seed (name<TAB>title<TAB>alt) to read instead of the configured one
        #[arg(short, long)]
        names: Option<PathBuf>,

        /// Listing to read instead of the configured one
        #[arg(short, long)]
        listing: Option<PathBuf>,

        /// Overwrite existing dictionaries
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect the effective settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show settings and resolved paths
    Show,

    /// Print the settings file path
    Path,
}
