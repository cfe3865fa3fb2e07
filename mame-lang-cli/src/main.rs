//! mame-lang CLI
//!
//! Command-line interface for building MxUI language lists from MAME
//! machine listings.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Emit an empty info line, used to space out report sections.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let root = mame_lang_core::resolve_root(cli.root);
    let config = cli.config;

    let result = match cli.command {
        Commands::Generate {
            listing,
            titles,
            bootlegs,
        } => commands::generate::run_generate(&root, config, listing, titles, bootlegs),
        Commands::Extract {
            names,
            listing,
            force,
        } => commands::extract::run_extract(&root, config, names, listing, force),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&root, config),
            ConfigAction::Path => commands::config::run_config_path(&root, config),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
