pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod generate;

use std::path::{Path, PathBuf};

use mame_lang_core::{LangSettings, ResolvedPaths, settings_path};

use crate::CliError;

/// Settings file in effect: the `--config` override or the one under `root`.
pub(crate) fn effective_settings_path(root: &Path, config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| settings_path(root))
}

/// Load settings and resolve every path against `root`.
pub(crate) fn load_paths(
    root: &Path,
    config: Option<PathBuf>,
) -> Result<(LangSettings, ResolvedPaths), CliError> {
    let path = effective_settings_path(root, config);
    let settings = LangSettings::load(&path)?;
    let paths = settings.resolve(root)?;
    log::debug!("Root: {}", paths.root.display());
    Ok((settings, paths))
}

/// Replace `target` with `value` when an override was given.
pub(crate) fn apply_override(target: &mut PathBuf, value: Option<PathBuf>) {
    if let Some(value) = value {
        *target = value;
    }
}
