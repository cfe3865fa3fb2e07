//! Translator work files derived from a listing.
//!
//! A vocabulary pass runs once per MAME release. It seeds the title
//! dictionary from an older localized list, and collects the untranslated
//! titles and annotation terms. It also drafts the bootleg-phrase
//! dictionary that the generation pass reads.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::dictionary::{NameMap, write_pairs};
use crate::error::LangError;
use crate::listing::Listing;
use crate::output::create_parent;
use crate::settings::ResolvedPaths;

/// Annotation prefix naming the machine a bootleg was copied from.
pub const BOOTLEG_OF: &str = "bootleg of";
pub const BOOTLEG_OF_LOCALIZED: &str = "盗版自";

/// Sorted work lists for translators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Folded titles with their seeded translation.
    pub translated: Vec<(String, String)>,
    /// Folded titles with no seeded translation.
    pub untranslated: Vec<String>,
    /// Annotation terms that contain a letter, excluding bootleg sources.
    pub version_terms: Vec<String>,
    /// Draft `bootleg of X` translations.
    pub bootleg_phrases: Vec<(String, String)>,
}

/// Collect the vocabulary of `listing`, seeding translations from `names`.
///
/// When several machines share a folded title, the last seeded translation
/// wins.
pub fn extract_vocabulary(listing: &Listing, names: &NameMap) -> Vocabulary {
    let mut translations: HashMap<String, &str> = HashMap::new();
    for machine in &listing.machines {
        let Some(translated) = names.get(&machine.name) else {
            continue;
        };
        if translated.is_empty() {
            log::warn!("Ignoring empty seeded translation for {}", machine.name);
            continue;
        }
        translations.insert(machine.title_folded(), translated);
    }

    // A blank key would end the written dictionary early.
    let titles: BTreeSet<String> = listing
        .machines
        .iter()
        .filter(|m| {
            if m.title.is_empty() {
                log::warn!("Skipping {}: description has no base title", m.name);
            }
            !m.title.is_empty()
        })
        .map(|m| m.title_folded())
        .collect();
    let mut vocabulary = Vocabulary::default();
    for title in titles {
        match translations.get(&title) {
            Some(translated) => vocabulary
                .translated
                .push((title, translated.to_string())),
            None => vocabulary.untranslated.push(title),
        }
    }

    let terms: BTreeSet<&str> = listing
        .machines
        .iter()
        .flat_map(|m| m.annotation_tokens.iter())
        .map(|token| token.trim())
        .filter(|token| token.chars().any(|c| c.is_alphabetic() || c == '_'))
        .collect();

    for term in terms {
        let source = term
            .strip_prefix(BOOTLEG_OF)
            .map(str::trim)
            .filter(|s| !s.is_empty());
        match source {
            Some(source) => {
                let target = translations.get(source).copied().unwrap_or(source);
                vocabulary.bootleg_phrases.push((
                    format!("{BOOTLEG_OF} {source}"),
                    format!("{BOOTLEG_OF_LOCALIZED} {target}"),
                ));
            }
            None => vocabulary.version_terms.push(term.to_string()),
        }
    }

    vocabulary
}

/// Write the four work files.
///
/// The title and bootleg dictionaries land where the generation pass reads
/// them. Untranslated titles are written as pairs mapping each title to
/// itself so translators only need to edit the second line.
pub fn write_vocabulary(vocabulary: &Vocabulary, paths: &ResolvedPaths) -> Result<(), LangError> {
    let mut out = create(&paths.title_dictionary)?;
    write_pairs(&mut out, vocabulary.translated.iter().map(|(k, v)| (k, v)))?;
    out.flush()?;

    let mut out = create(&paths.untranslated_pairs)?;
    write_pairs(&mut out, vocabulary.untranslated.iter().map(|t| (t, t)))?;
    out.flush()?;

    let mut out = create(&paths.version_terms)?;
    for term in &vocabulary.version_terms {
        writeln!(out, "{term}")?;
    }
    out.flush()?;

    let mut out = create(&paths.bootleg_dictionary)?;
    write_pairs(&mut out, vocabulary.bootleg_phrases.iter().map(|(k, v)| (k, v)))?;
    out.flush()?;

    Ok(())
}

fn create(path: &std::path::Path) -> std::io::Result<BufWriter<File>> {
    create_parent(path)?;
    Ok(BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::parse_listing;

    const LISTING: &str = "<mame build=\"0.271\">\n\
\t<machine name=\"sf2\">\n\t\t<description>Street Fighter II (World 910522)</description>\n\
\t<machine name=\"sf2b\">\n\t\t<description>Street Fighter II (bootleg of Street Fighter II, set 2)</description>\n\
\t<machine name=\"1942\">\n\t\t<description>1942 (Revision B)</description>\n\
\t<machine name=\"1942b\">\n\t\t<description>1942 [bootleg of 1942]</description>\n\
\t<machine name=\"pacman\">\n\t\t<description>Pac-Man (Midway)</description>\n\
\t<machine name=\"xx\">\n\t\t<description>XX (1990, 2)</description>\n";

    fn names() -> NameMap {
        [("sf2", "街头霸王 II"), ("pacman", "吃豆人")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_titles_split_by_translation() {
        let listing = parse_listing(LISTING.as_bytes()).unwrap();
        let vocab = extract_vocabulary(&listing, &names());
        assert_eq!(
            vocab.translated,
            vec![
                ("pac-man".to_string(), "吃豆人".to_string()),
                ("street fighter ii".to_string(), "街头霸王 II".to_string()),
            ]
        );
        assert_eq!(vocab.untranslated, vec!["1942", "xx"]);
    }

    #[test]
    fn test_version_terms_need_letters() {
        let listing = parse_listing(LISTING.as_bytes()).unwrap();
        let vocab = extract_vocabulary(&listing, &names());
        assert_eq!(
            vocab.version_terms,
            vec!["midway", "revision b", "set 2", "world 910522"]
        );
    }

    #[test]
    fn test_bootleg_phrases() {
        let listing = parse_listing(LISTING.as_bytes()).unwrap();
        let vocab = extract_vocabulary(&listing, &names());
        assert_eq!(
            vocab.bootleg_phrases,
            vec![
                ("bootleg of 1942".to_string(), "盗版自 1942".to_string()),
                (
                    "bootleg of street fighter ii".to_string(),
                    "盗版自 街头霸王 II".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_empty_titles_and_translations_skipped() {
        let listing = parse_listing(
            "\t<machine name=\"neogeo\">\n\t\t<description>[BIOS] Neo-Geo</description>\n\
             \t<machine name=\"sf2\">\n\t\t<description>Street Fighter II</description>\n\
             \t<machine name=\"dkong\">\n\t\t<description>Donkey Kong</description>\n"
                .as_bytes(),
        )
        .unwrap();
        let names: NameMap = [("neogeo", "BIOS"), ("sf2", "街头霸王 II"), ("dkong", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let vocab = extract_vocabulary(&listing, &names);
        assert_eq!(
            vocab.translated,
            vec![("street fighter ii".to_string(), "街头霸王 II".to_string())]
        );
        assert_eq!(vocab.untranslated, vec!["donkey kong"]);

        let tmp = tempfile::TempDir::new().unwrap();
        let paths = crate::settings::LangSettings::default()
            .resolve(tmp.path())
            .unwrap();
        write_vocabulary(&vocab, &paths).unwrap();

        let titles = crate::dictionary::load_pairs(&paths.title_dictionary).unwrap();
        assert_eq!(titles.end, crate::dictionary::SectionEnd::EndOfInput);
        assert_eq!(titles.dictionary.len(), 1);
        assert_eq!(titles.dictionary.get("street fighter ii"), Some("街头霸王 II"));
        let pending = crate::dictionary::load_pairs(&paths.untranslated_pairs).unwrap();
        assert_eq!(pending.dictionary.get("donkey kong"), Some("donkey kong"));
    }

    #[test]
    fn test_write_vocabulary() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = crate::settings::LangSettings::default()
            .resolve(tmp.path())
            .unwrap();
        let listing = parse_listing(LISTING.as_bytes()).unwrap();
        let vocab = extract_vocabulary(&listing, &names());

        write_vocabulary(&vocab, &paths).unwrap();

        let titles = crate::dictionary::load_pairs(&paths.title_dictionary).unwrap();
        assert_eq!(titles.dictionary.get("pac-man"), Some("吃豆人"));
        let pending = std::fs::read_to_string(&paths.untranslated_pairs).unwrap();
        assert_eq!(pending, "1942\n1942\nxx\nxx\n");
        let terms = std::fs::read_to_string(&paths.version_terms).unwrap();
        assert_eq!(terms.lines().count(), 4);
        let bootlegs = crate::dictionary::load_pairs(&paths.bootleg_dictionary).unwrap();
        assert_eq!(
            bootlegs.dictionary.get("bootleg of 1942"),
            Some("盗版自 1942")
        );
    }
}
