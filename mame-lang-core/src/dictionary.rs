//! Translation dictionaries maintained by hand.
//!
//! The paired-line form is a sequence of two-line records, source then
//! translation:
//! ```text
//! 1942
//! 一九四二
//! bootleg of street fighter ii
//! 盗版自 街头霸王 II
//! ```
//! A blank line where a key is expected closes the section.
//!
//! The name file is a three-column TSV (`name<TAB>description<TAB>unused`),
//! the same layout as the generated list, so an older list can seed a new
//! translation pass.

use std::collections::HashMap;
use std::io::{BufRead, Read, Write};
use std::path::Path;

use crate::error::LangError;
use crate::title::split_title;

/// A case-folded source string to translation mapping.
///
/// Entries keep the position of their first insertion, so iteration order
/// is the order of the source file.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation. The key is stored as given; callers fold it.
    /// A repeated key replaces the value but keeps its original position.
    pub fn insert(&mut self, key: String, value: String) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Look up an already folded key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Look up a source string in any casing.
    pub fn translate(&self, source: &str) -> Option<&str> {
        self.get(&source.to_lowercase())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

/// How a paired-line file ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEnd {
    /// Every line was consumed.
    EndOfInput,
    /// A blank line in key position at this 1-based line; the rest was ignored.
    BlankLine { line: usize },
}

/// Result of loading a paired-line dictionary.
#[derive(Debug, Clone)]
pub struct PairFile {
    pub dictionary: Dictionary,
    pub end: SectionEnd,
}

/// Parse a paired-line dictionary.
///
/// Keys are trimmed and lowercased, values only trimmed. A key without a
/// following value line is a [`LangError::TruncatedDictionary`], a blank
/// value line a [`LangError::EmptyTranslation`].
pub fn parse_pairs<R: BufRead>(reader: R) -> Result<PairFile, LangError> {
    let mut dictionary = Dictionary::new();
    let mut lines = reader.lines().enumerate();

    let end = loop {
        let Some((idx, key_result)) = lines.next() else {
            break SectionEnd::EndOfInput;
        };
        let key_line = key_result?;
        let key = key_line.trim_start_matches('\u{feff}').trim();
        if key.is_empty() {
            break SectionEnd::BlankLine { line: idx + 1 };
        }
        let key = key.to_lowercase();

        let (value_idx, value_line) = match lines.next() {
            Some((value_idx, value_result)) => (value_idx, value_result?),
            None => return Err(LangError::truncated(idx + 1, key)),
        };
        let value = value_line.trim();
        if value.is_empty() {
            return Err(LangError::empty_translation(value_idx + 1, key));
        }

        dictionary.insert(key, value.to_string());
    };

    if let SectionEnd::BlankLine { line } = end {
        log::debug!("Dictionary section closed by blank line {line}");
    }
    Ok(PairFile { dictionary, end })
}

/// Load a paired-line dictionary from a path.
pub fn load_pairs(path: &Path) -> Result<PairFile, LangError> {
    let file = std::fs::File::open(path)?;
    parse_pairs(std::io::BufReader::new(file))
}

/// Write records in the paired-line form read by [`parse_pairs`].
pub fn write_pairs<W, I, K, V>(writer: &mut W, pairs: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in pairs {
        writeln!(writer, "{}", key.as_ref())?;
        writeln!(writer, "{}", value.as_ref())?;
    }
    Ok(())
}

/// Internal machine name to translated base title.
pub type NameMap = HashMap<String, String>;

/// Parse a three-column name file.
///
/// Rows without exactly three columns are skipped. The description column
/// is reduced to its base title before it is stored under the name.
pub fn parse_names<R: Read>(reader: R) -> Result<NameMap, LangError> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut names = NameMap::new();
    for result in tsv.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping malformed name row: {e}");
                continue;
            }
        };

        if record.len() != 3 {
            log::debug!(
                "Skipping name row with {} columns at {:?}",
                record.len(),
                record.position().map(|p| p.line())
            );
            continue;
        }

        let name = record.get(0).unwrap_or("").trim();
        let title = split_title(record.get(1).unwrap_or("")).title.trim();
        names.insert(name.to_string(), title.to_string());
    }

    Ok(names)
}

/// Load a three-column name file from a path.
pub fn load_names(path: &Path) -> Result<NameMap, LangError> {
    let file = std::fs::File::open(path)?;
    parse_names(std::io::BufReader::new(file))
}
