use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mame_lang_core::{extract_vocabulary, load_names, parse_listing_file, write_vocabulary};

use crate::CliError;

use super::{apply_override, load_paths};

pub(crate) fn run_extract(
    root: &Path,
    config: Option<PathBuf>,
    names: Option<PathBuf>,
    listing: Option<PathBuf>,
    force: bool,
) -> Result<(), CliError> {
    let (_, mut paths) = load_paths(root, config)?;
    apply_override(&mut paths.name_file, names);
    apply_override(&mut paths.listing, listing);

    if !force {
        let existing: Vec<&PathBuf> = [&paths.title_dictionary, &paths.bootleg_dictionary]
            .into_iter()
            .filter(|p| p.exists())
            .collect();
        if let Some(first) = existing.first() {
            return Err(CliError::other(format!(
                "{} already exists; pass --force to overwrite hand-edited dictionaries",
                first.display()
            )));
        }
    }

    log::info!("Reading listing {}", paths.listing.display());
    let listing = parse_listing_file(&paths.listing)?;
    log::info!("Reading name seed {}", paths.name_file.display());
    let names = load_names(&paths.name_file)?;

    let vocabulary = extract_vocabulary(&listing, &names);
    write_vocabulary(&vocabulary, &paths)?;

    crate::log_blank();
    log::info!(
        "{}",
        "Vocabulary extracted".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Translated titles:   {:>8}  {}",
        vocabulary.translated.len(),
        paths.title_dictionary.display(),
    );
    log::info!(
        "  Untranslated titles: {:>8}  {}",
        vocabulary.untranslated.len(),
        paths.untranslated_pairs.display(),
    );
    log::info!(
        "  Version terms:       {:>8}  {}",
        vocabulary.version_terms.len(),
        paths.version_terms.display(),
    );
    log::info!(
        "  Bootleg phrases:     {:>8}  {}",
        vocabulary.bootleg_phrases.len(),
        paths.bootleg_dictionary.display(),
    );

    Ok(())
}
