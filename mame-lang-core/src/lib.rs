//! Simplified Chinese language lists for MxUI from MAME machine listings.
//!
//! The pipeline reads a `-listxml` export, looks up each base title in a
//! hand-maintained dictionary, rewrites the annotation (bootleg sources,
//! set numbers, gambling markers), and writes the list file MxUI loads.
//! A separate vocabulary pass produces the dictionaries' work files.

pub mod dictionary;
pub mod error;
pub mod listing;
pub mod localize;
pub mod output;
pub mod settings;
pub mod title;
pub mod vocab;

pub use dictionary::{
    Dictionary, NameMap, PairFile, SectionEnd, load_names, load_pairs, parse_names, parse_pairs,
    write_pairs,
};
pub use error::LangError;
pub use listing::{Listing, MachineEntry, parse_listing, parse_listing_file};
pub use localize::{BootlegRules, compose_line, localize_title};
pub use output::{FailedRecord, Generation, OutputRecord, generate, write_generation};
pub use settings::{LangSettings, ResolvedPaths, resolve_encoding, resolve_root, settings_path};
pub use title::{SplitTitle, split_title, tokenize_annotation};
pub use vocab::{Vocabulary, extract_vocabulary, write_vocabulary};
