//! Generation of the MxUI language list.
//!
//! MxUI reads `name<TAB>display<TAB>sort-key` lines in the system's legacy
//! code page. The display text doubles as the sort key. A UTF-8 copy is
//! written alongside for editing and review.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::dictionary::Dictionary;
use crate::error::LangError;
use crate::listing::Listing;
use crate::localize::{BootlegRules, compose_line, localize_title};
use crate::settings::ResolvedPaths;

/// One localized machine line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub name: String,
    pub line: String,
}

impl OutputRecord {
    /// The record as written to the list file, newline included.
    pub fn to_list_line(&self) -> String {
        format!("{}\t{}\t{}\n", self.name, self.line, self.line)
    }
}

/// A translated machine whose line could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRecord {
    pub name: String,
    pub title: String,
    pub annotation: String,
    pub reason: String,
}

/// Everything produced by one generation pass, ready to be written.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The encoding the list was actually written in.
    pub encoding: &'static Encoding,
    /// The list file contents in `encoding`.
    pub encoded: Vec<u8>,
    pub records: Vec<OutputRecord>,
    /// Folded titles without a translation, in first-seen order.
    pub untranslated: Vec<String>,
    pub failures: Vec<FailedRecord>,
}

impl Generation {
    /// The list contents decoded back from `encoding`.
    pub fn utf8_text(&self) -> Cow<'_, str> {
        self.encoding.decode_without_bom_handling(&self.encoded).0
    }
}

/// Localize every machine with a translated title.
///
/// Machines without a translation only contribute their folded title to
/// [`Generation::untranslated`]. A line that cannot be represented in
/// `encoding` is logged, recorded in [`Generation::failures`], and skipped.
pub fn generate(
    listing: &Listing,
    titles: &Dictionary,
    rules: &BootlegRules,
    encoding: &'static Encoding,
) -> Generation {
    // UTF-16 and `replacement` labels encode to UTF-8.
    let encoding = encoding.output_encoding();
    let mut generation = Generation {
        encoding,
        encoded: Vec::new(),
        records: Vec::new(),
        untranslated: Vec::new(),
        failures: Vec::new(),
    };
    let mut seen_untranslated: HashSet<String> = HashSet::new();

    for machine in &listing.machines {
        let folded = machine.title_folded();
        let Some(translated) = titles.get(&folded) else {
            if seen_untranslated.insert(folded.clone()) {
                generation.untranslated.push(folded);
            }
            continue;
        };

        let title = localize_title(translated);
        let annotation = rules.localize(&machine.annotation);
        let record = OutputRecord {
            name: machine.name.clone(),
            line: compose_line(&title, &annotation),
        };

        let list_line = record.to_list_line();
        let (bytes, _, had_errors) = encoding.encode(&list_line);
        if had_errors {
            log::warn!(
                "Skipping {}: not representable in {}: {} {}",
                machine.name,
                encoding.name(),
                title,
                annotation,
            );
            generation.failures.push(FailedRecord {
                name: machine.name.clone(),
                title,
                annotation,
                reason: format!("unmappable character for {}", encoding.name()),
            });
            continue;
        }

        generation.encoded.extend_from_slice(&bytes);
        generation.records.push(record);
    }

    generation
}

/// Write the list file, its UTF-8 copy, and the untranslated title report.
pub fn write_generation(generation: &Generation, paths: &ResolvedPaths) -> Result<(), LangError> {
    create_parent(&paths.list_file)?;
    fs::write(&paths.list_file, &generation.encoded)?;

    create_parent(&paths.utf8_list_file)?;
    fs::write(&paths.utf8_list_file, generation.utf8_text().as_bytes())?;

    create_parent(&paths.untranslated)?;
    let mut report = generation.untranslated.join("\n");
    if !report.is_empty() {
        report.push('\n');
    }
    fs::write(&paths.untranslated, report)?;

    log::debug!(
        "Wrote {} records to {}",
        generation.records.len(),
        paths.list_file.display()
    );
    Ok(())
}

pub(crate) fn create_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
