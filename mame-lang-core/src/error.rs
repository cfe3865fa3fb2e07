/// Errors that can occur while reading listings and dictionaries or writing
/// the localized list.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing at line {line}: {message}")]
    InvalidListing { line: usize, message: String },

    #[error("Truncated dictionary at line {line}: key {key:?} has no value line")]
    TruncatedDictionary { line: usize, key: String },

    #[error("Empty translation at line {line} for key {key:?}")]
    EmptyTranslation { line: usize, key: String },

    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Unknown output encoding: {0}")]
    UnknownEncoding(String),
}

impl LangError {
    pub fn invalid_listing(line: usize, msg: impl Into<String>) -> Self {
        Self::InvalidListing {
            line,
            message: msg.into(),
        }
    }

    pub fn truncated(line: usize, key: impl Into<String>) -> Self {
        Self::TruncatedDictionary {
            line,
            key: key.into(),
        }
    }

    pub fn empty_translation(line: usize, key: impl Into<String>) -> Self {
        Self::EmptyTranslation {
            line,
            key: key.into(),
        }
    }

    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        Self::UnknownEncoding(label.into())
    }
}
