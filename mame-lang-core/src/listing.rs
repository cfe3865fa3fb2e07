//! Line-oriented parser for MAME `-listxml` exports.
//!
//! The export is far too large to be worth a full XML parse, and only two
//! kinds of line matter:
//! ```text
//! <mame build="0.271 (mame0271)" debug="no" mameconfig="10">
//! 	<machine name="1942" sourcefile="capcom/1942.cpp">
//! 		<description>1942 (Revision B)</description>
//! ```
//! A machine declaration is always followed by its description line, which
//! must be a well-formed element on its own.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::LangError;
use crate::title::{split_title, tokenize_annotation};

/// A parsed machine listing.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Value of the root `build` attribute, empty when the declaration is absent.
    pub version: String,
    pub machines: Vec<MachineEntry>,
}

/// A single machine from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineEntry {
    /// Internal short name (e.g., "sf2ceb"). Unique within a listing.
    pub name: String,
    /// Base title with surrounding whitespace removed.
    pub title: String,
    /// Annotation from the first `(` or `[` onward, or empty.
    pub annotation: String,
    /// Tokens of the lowercased annotation.
    pub annotation_tokens: Vec<String>,
}

impl MachineEntry {
    pub fn from_description(name: impl Into<String>, description: &str) -> Self {
        let split = split_title(description);
        let annotation = split.annotation().to_string();
        Self {
            name: name.into(),
            title: split.title.trim().to_string(),
            annotation_tokens: tokenize_annotation(&annotation.to_lowercase()),
            annotation,
        }
    }

    /// Lookup key for the title dictionaries.
    pub fn title_folded(&self) -> String {
        self.title.to_lowercase()
    }

    pub fn annotation_folded(&self) -> String {
        self.annotation.to_lowercase()
    }
}

/// Parse a listing from a reader.
///
/// A malformed declaration or description line aborts the parse with
/// [`LangError::InvalidListing`]. Lines that are neither are ignored.
pub fn parse_listing<R: BufRead>(reader: R) -> Result<Listing, LangError> {
    let mut listing = Listing::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut lines = reader.lines().enumerate();

    while let Some((idx, line_result)) = lines.next() {
        let line = line_result?;
        let line_no = idx + 1;
        let trimmed = line.trim_start();

        if trimmed.starts_with("<mame") {
            listing.version =
                declaration_attribute(trimmed, "mame", "build", line_no)?.unwrap_or_default();
        } else if trimmed.starts_with("<machine") {
            let name = declaration_attribute(trimmed, "machine", "name", line_no)?
                .ok_or_else(|| {
                    LangError::invalid_listing(line_no, "machine declaration has no name")
                })?;

            let (desc_idx, desc_result) = lines.next().ok_or_else(|| {
                LangError::invalid_listing(line_no, format!("machine {name} has no description"))
            })?;
            let desc_line = desc_result?;
            let description = parse_description(desc_line.trim(), desc_idx + 1)?;

            if !seen.insert(name.clone()) {
                log::warn!("Duplicate machine {name} at line {line_no}, keeping the first entry");
                continue;
            }
            listing
                .machines
                .push(MachineEntry::from_description(name, &description));
        }
    }

    log::debug!(
        "Parsed listing build {:?} with {} machines",
        listing.version,
        listing.machines.len()
    );
    Ok(listing)
}

/// Parse a listing file from a path.
pub fn parse_listing_file(path: &Path) -> Result<Listing, LangError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_listing(reader)
}

/// Read one attribute from an opening tag. The tag itself may be left
/// unclosed, as it is in the export.
fn declaration_attribute(
    line: &str,
    tag: &str,
    attr: &str,
    line_no: usize,
) -> Result<Option<String>, LangError> {
    let invalid = |msg: String| LangError::invalid_listing(line_no, msg);
    let mut xml = Reader::from_str(line);

    match xml.read_event().map_err(|e| invalid(e.to_string()))? {
        Event::Start(e) | Event::Empty(e) => {
            if e.name().as_ref() != tag.as_bytes() {
                return Err(invalid(format!("expected <{tag}> declaration")));
            }
            let Some(value) = e
                .try_get_attribute(attr)
                .map_err(|e| invalid(e.to_string()))?
            else {
                return Ok(None);
            };
            let value = value.unescape_value().map_err(|e| invalid(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        other => Err(invalid(format!("expected <{tag}> declaration, found {other:?}"))),
    }
}

/// Extract the text of a single-element fragment such as
/// `<description>1942 (Revision B)</description>`.
fn parse_description(fragment: &str, line_no: usize) -> Result<String, LangError> {
    let invalid = |msg: String| LangError::invalid_listing(line_no, msg);
    let mut xml = Reader::from_str(fragment);

    let root = match xml.read_event().map_err(|e| invalid(e.to_string()))? {
        Event::Start(e) => e.name().as_ref().to_vec(),
        Event::Empty(_) => return Err(invalid("description element is empty".into())),
        other => {
            return Err(invalid(format!(
                "expected a description element, found {other:?}"
            )));
        }
    };

    let mut text = String::new();
    loop {
        match xml.read_event().map_err(|e| invalid(e.to_string()))? {
            Event::Text(e) => text.push_str(&e.unescape().map_err(|e| invalid(e.to_string()))?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Comment(_) => {}
            Event::End(e) if e.name().as_ref() == root.as_slice() => break,
            Event::Eof => return Err(invalid("description element is not closed".into())),
            other => {
                return Err(invalid(format!(
                    "unexpected content in description: {other:?}"
                )));
            }
        }
    }

    match xml.read_event().map_err(|e| invalid(e.to_string()))? {
        Event::Eof => {}
        other => {
            return Err(invalid(format!(
                "trailing content after description: {other:?}"
            )));
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(invalid("description has no text".into()));
    }
    Ok(text.to_string())
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
