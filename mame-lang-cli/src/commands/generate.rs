use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mame_lang_core::{BootlegRules, SectionEnd, generate, load_pairs, parse_listing_file, write_generation};

use crate::CliError;

use super::{apply_override, load_paths};

pub(crate) fn run_generate(
    root: &Path,
    config: Option<PathBuf>,
    listing: Option<PathBuf>,
    titles: Option<PathBuf>,
    bootlegs: Option<PathBuf>,
) -> Result<(), CliError> {
    let (settings, mut paths) = load_paths(root, config)?;
    apply_override(&mut paths.listing, listing);
    apply_override(&mut paths.title_dictionary, titles);
    apply_override(&mut paths.bootleg_dictionary, bootlegs);
    let encoding = settings.output_encoding()?;

    log::info!("Reading listing {}", paths.listing.display());
    let listing = parse_listing_file(&paths.listing)?;
    log::info!(
        "  MAME {} ({} machines)",
        if listing.version.is_empty() {
            "unknown build"
        } else {
            listing.version.as_str()
        },
        listing.machines.len(),
    );

    let titles = load_pairs(&paths.title_dictionary)?;
    report_section_end(&paths.title_dictionary, &titles.end);
    let bootlegs = load_pairs(&paths.bootleg_dictionary)?;
    report_section_end(&paths.bootleg_dictionary, &bootlegs.end);
    log::info!(
        "  {} title translations, {} bootleg phrases",
        titles.dictionary.len(),
        bootlegs.dictionary.len(),
    );

    let rules = BootlegRules::new(&bootlegs.dictionary)?;
    let generation = generate(&listing, &titles.dictionary, &rules, encoding);
    write_generation(&generation, &paths)?;
    if generation.encoding != encoding {
        log::warn!(
            "{} cannot be written as bytes, list written as {}",
            encoding.name(),
            generation.encoding.name(),
        );
    }

    crate::log_blank();
    log::info!(
        "{} {} lines written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        generation.records.len(),
        paths.list_file.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  UTF-8 copy: {}", paths.utf8_list_file.display());
    if generation.untranslated.is_empty() {
        log::info!("  Every title is translated");
    } else {
        log::info!(
            "  {} untranslated titles listed in {}",
            generation
                .untranslated
                .len()
                .if_supports_color(Stdout, |t| t.yellow()),
            paths.untranslated.display(),
        );
    }
    if !generation.failures.is_empty() {
        log::warn!(
            "{} machines skipped: not representable in {}",
            generation.failures.len(),
            generation.encoding.name(),
        );
    }

    Ok(())
}

fn report_section_end(path: &Path, end: &SectionEnd) {
    if let SectionEnd::BlankLine { line } = end {
        log::debug!(
            "{}: blank line {} ends the dictionary, later lines ignored",
            path.display(),
            line
        );
    }
}
