use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{effective_settings_path, load_paths};

/// Show the effective settings and where each file resolves.
pub(crate) fn run_config_show(root: &Path, config: Option<PathBuf>) -> Result<(), CliError> {
    let settings_file = effective_settings_path(root, config.clone());
    let (settings, paths) = load_paths(root, config)?;

    log::info!(
        "{}",
        "mame-lang Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if settings_file.exists() {
        log::info!(
            "  Settings file: {} {}",
            settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let encoding = settings
        .output_encoding()
        .map_err(|e| CliError::config(e.to_string()))?;
    log::info!("  Encoding:      {}", encoding.name());
    crate::log_blank();

    let rows = [
        ("Root", &paths.root),
        ("Listing", &paths.listing),
        ("Work dir", &paths.work_dir),
        ("Title dict", &paths.title_dictionary),
        ("Bootleg dict", &paths.bootleg_dictionary),
        ("Name seed", &paths.name_file),
        ("Untranslated", &paths.untranslated),
        ("Pending pairs", &paths.untranslated_pairs),
        ("Version terms", &paths.version_terms),
        ("Output dir", &paths.output_dir),
        ("List file", &paths.list_file),
        ("UTF-8 list", &paths.utf8_list_file),
    ];
    for (label, path) in rows {
        let status = if path.exists() {
            "".to_string()
        } else {
            format!(" {}", "(missing)".if_supports_color(Stdout, |t| t.dimmed()))
        };
        log::info!("  {:<14} {}{}", format!("{label}:"), path.display(), status);
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(root: &Path, config: Option<PathBuf>) -> Result<(), CliError> {
    println!("{}", effective_settings_path(root, config).display());
    Ok(())
}
